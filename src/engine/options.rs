//! Options methods for SceneEngine

use std::path::Path;

use super::SceneEngine;
use crate::error::ScrollscapeError;
use crate::options::Options;
use crate::scene::SceneLayout;

impl SceneEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply all changes to subsystems.
    ///
    /// The clock and rig offset carry over; geometry is only rebuilt when
    /// layout or particle options changed.
    pub fn set_options(&mut self, new: Options) {
        if self.options.layout_differs(&new) {
            log::debug!("layout changed, rebuilding scene layout");
            self.renderer.apply_layout(&SceneLayout::new(&new));
        }
        self.frame_loop.set_options(&new);
        self.renderer.apply_options(&new);
        self.options = new;
    }

    /// Set a single option field from a JSON value and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::OptionsParse`] for unknown fields or
    /// mistyped values; the current options are left unchanged.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), ScrollscapeError> {
        let mut next = self.options.clone();
        next.set_option(section, field, value)?;
        self.set_options(next);
        Ok(())
    }

    /// Load a preset file and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError`] if the file cannot be read or parsed.
    pub fn load_preset(&mut self, path: &Path) -> Result<(), ScrollscapeError> {
        let options = Options::load(path)?;
        log::info!("loaded preset {}", path.display());
        self.set_options(options);
        Ok(())
    }
}
