//! # Catalog Views
//!
//! Trait-based rendering so the CLI and tests share one presentation path.
//! `TextView` writes plain lines to any `io::Write` target.

use crate::catalog::{Catalog, Item};
use crate::error::{Error, Result};
use crate::recipe;
use std::io::Write;

/// Renders catalog listings and item detail
pub trait CatalogView {
    /// Render the full item list in catalog order
    fn render_catalog(&mut self, catalog: &Catalog) -> Result<()>;

    /// Render one item with its resolved recipe badges
    fn show_detail(&mut self, catalog: &Catalog, item: &Item) -> Result<()>;
}

/// Plain-text view over any writer
pub struct TextView<W: Write> {
    out: W,
}

impl<W: Write> TextView<W> {
    /// Create a view writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the view and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextView<std::io::Stdout> {
    /// A view over stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> CatalogView for TextView<W> {
    fn render_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        for item in catalog.iter() {
            writeln!(self.out, "{}", item.label()).map_err(Error::from)?;
        }
        Ok(())
    }

    /// One badge line per displayable recipe. A recipe that fails to
    /// resolve renders as an unresolved marker instead of hiding the
    /// rest of the item.
    fn show_detail(&mut self, catalog: &Catalog, item: &Item) -> Result<()> {
        writeln!(self.out, "{}", item.label()).map_err(Error::from)?;

        let resolved = recipe::resolve_item(catalog, item);
        if resolved.is_empty() {
            writeln!(self.out, "  seed item").map_err(Error::from)?;
            return Ok(());
        }

        for (text, badge) in resolved {
            match badge {
                Ok(line) => writeln!(self.out, "  {}", line).map_err(Error::from)?,
                Err(e) => writeln!(self.out, "  [unresolved] {}: {}", text, e.message())
                    .map_err(Error::from)?,
            }
        }
        Ok(())
    }
}
