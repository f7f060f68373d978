use std::fmt;

use thiserror::Error;

use crate::canvas::DrawError;

/// The vertical regions of the page, in render order. Used to name
/// where a drawing failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Logo,
    Issuer,
    Title,
    DueDate,
    BillTo,
    HeaderRow,
    Items,
    Totals,
    Notes,
    Footer,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::Logo => "logo",
            Band::Issuer => "issuer",
            Band::Title => "title",
            Band::DueDate => "due date",
            Band::BillTo => "bill-to",
            Band::HeaderRow => "header row",
            Band::Items => "items",
            Band::Totals => "totals",
            Band::Notes => "notes",
            Band::Footer => "footer",
        };
        f.write_str(name)
    }
}

/// Terminal render failure. Resource problems (logo missing or
/// undecodable) degrade instead of erroring, so the only way a render
/// fails is a canvas primitive refusing a draw call.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed in the {band} band: {source}")]
    Draw {
        band: Band,
        #[source]
        source: DrawError,
    },
}

pub(crate) fn in_band<T>(
    band: Band,
    result: Result<T, DrawError>,
) -> Result<T, RenderError> {
    result.map_err(|source| RenderError::Draw { band, source })
}
