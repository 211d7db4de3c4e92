//! Built-in named colorscales.
//!
//! Stop definitions follow Plotly's classic scales so a `color_map` name
//! configured for a Plotly figure resolves to the same gradient here.

use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};

use super::Colorscale;

enum Definition {
    Stops(&'static [(f64, &'static str)]),
    Swatches(&'static [&'static str]),
}

struct CatalogEntry {
    name: &'static str,
    definition: Definition,
}

/// Name suffix selecting the reversed variant of a catalog scale.
pub const REVERSED_SUFFIX: &str = "_r";

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Greens",
        definition: Definition::Stops(&[
            (0.0, "rgb(0,68,27)"),
            (0.125, "rgb(0,109,44)"),
            (0.25, "rgb(35,139,69)"),
            (0.375, "rgb(65,171,93)"),
            (0.5, "rgb(116,196,118)"),
            (0.625, "rgb(161,217,155)"),
            (0.75, "rgb(199,233,192)"),
            (0.875, "rgb(229,245,224)"),
            (1.0, "rgb(247,252,245)"),
        ]),
    },
    CatalogEntry {
        name: "Greys",
        definition: Definition::Stops(&[(0.0, "rgb(0,0,0)"), (1.0, "rgb(255,255,255)")]),
    },
    CatalogEntry {
        name: "Blues",
        definition: Definition::Stops(&[
            (0.0, "rgb(5,10,172)"),
            (0.35, "rgb(40,60,190)"),
            (0.5, "rgb(70,100,245)"),
            (0.6, "rgb(90,120,245)"),
            (0.7, "rgb(106,137,247)"),
            (1.0, "rgb(220,220,220)"),
        ]),
    },
    CatalogEntry {
        name: "Reds",
        definition: Definition::Stops(&[
            (0.0, "rgb(220,220,220)"),
            (0.2, "rgb(245,195,157)"),
            (0.4, "rgb(245,160,105)"),
            (1.0, "rgb(178,10,28)"),
        ]),
    },
    CatalogEntry {
        name: "RdBu",
        definition: Definition::Stops(&[
            (0.0, "rgb(5,10,172)"),
            (0.35, "rgb(106,137,247)"),
            (0.5, "rgb(190,190,190)"),
            (0.6, "rgb(220,170,132)"),
            (0.7, "rgb(230,145,90)"),
            (1.0, "rgb(178,10,28)"),
        ]),
    },
    CatalogEntry {
        name: "Bluered",
        definition: Definition::Stops(&[(0.0, "rgb(0,0,255)"), (1.0, "rgb(255,0,0)")]),
    },
    CatalogEntry {
        name: "Portland",
        definition: Definition::Stops(&[
            (0.0, "rgb(12,51,131)"),
            (0.25, "rgb(10,136,186)"),
            (0.5, "rgb(242,211,56)"),
            (0.75, "rgb(242,143,56)"),
            (1.0, "rgb(217,30,30)"),
        ]),
    },
    CatalogEntry {
        name: "Jet",
        definition: Definition::Stops(&[
            (0.0, "rgb(0,0,131)"),
            (0.125, "rgb(0,60,170)"),
            (0.375, "rgb(5,255,255)"),
            (0.625, "rgb(255,255,0)"),
            (0.875, "rgb(250,0,0)"),
            (1.0, "rgb(128,0,0)"),
        ]),
    },
    CatalogEntry {
        name: "Hot",
        definition: Definition::Stops(&[
            (0.0, "rgb(0,0,0)"),
            (0.3, "rgb(230,0,0)"),
            (0.6, "rgb(255,210,0)"),
            (1.0, "rgb(255,255,255)"),
        ]),
    },
    CatalogEntry {
        name: "Blackbody",
        definition: Definition::Stops(&[
            (0.0, "rgb(0,0,0)"),
            (0.2, "rgb(230,0,0)"),
            (0.4, "rgb(230,210,0)"),
            (0.7, "rgb(255,255,255)"),
            (1.0, "rgb(160,200,255)"),
        ]),
    },
    CatalogEntry {
        name: "Earth",
        definition: Definition::Stops(&[
            (0.0, "rgb(0,0,130)"),
            (0.1, "rgb(0,180,180)"),
            (0.2, "rgb(40,210,40)"),
            (0.4, "rgb(230,230,50)"),
            (0.6, "rgb(120,70,20)"),
            (1.0, "rgb(255,255,255)"),
        ]),
    },
    CatalogEntry {
        name: "Electric",
        definition: Definition::Stops(&[
            (0.0, "rgb(0,0,0)"),
            (0.15, "rgb(30,0,100)"),
            (0.4, "rgb(120,0,100)"),
            (0.6, "rgb(160,90,0)"),
            (0.8, "rgb(230,200,0)"),
            (1.0, "rgb(255,250,220)"),
        ]),
    },
    CatalogEntry {
        name: "Viridis",
        definition: Definition::Swatches(&[
            "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779",
            "#6ece58", "#b5de2b", "#fde725",
        ]),
    },
];

/// Catalog names in definition order.
pub fn catalog_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.name)
}

/// Resolves a catalog scale by case-insensitive name.
///
/// A trailing `_r` selects the reversed scale, e.g. `"Greens_r"`.
pub fn named_colorscale(name: &str) -> GraphResult<Colorscale> {
    let name = name.trim();
    let (base, reversed) = match strip_reversed_suffix(name) {
        Some(base) => (base, true),
        None => (name, false),
    };

    let entry = CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(base))
        .ok_or_else(|| GraphError::invalid(format!("unknown colorscale name `{name}`")))?;
    trace!(name = entry.name, reversed, "resolve catalog colorscale");

    let scale = match entry.definition {
        Definition::Stops(pairs) => Colorscale::from_pairs(pairs)?,
        Definition::Swatches(swatches) => Colorscale::from_swatches(swatches)?,
    };

    if reversed {
        debug!(name = entry.name, "reversing catalog colorscale");
        Ok(scale.reversed())
    } else {
        Ok(scale)
    }
}

fn strip_reversed_suffix(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(REVERSED_SUFFIX.len())?;
    let suffix = name.get(split..)?;
    suffix
        .eq_ignore_ascii_case(REVERSED_SUFFIX)
        .then(|| &name[..split])
}
