use glam::Vec3;

use crate::util::easing::EasingFunction;

/// Extra rotation (radians about X, Y, Z) added by one section spin.
pub const SPIN_AMOUNT: Vec3 = Vec3::new(6.0, 3.0, 1.5);

#[derive(Debug, Clone, Copy, Default)]
struct MeshSpin {
    /// Sum of all completed spins.
    settled: Vec3,
    /// Start time of the spin in progress.
    started: Option<f32>,
}

/// Eased extra rotation given to a section's mesh when that section is
/// scrolled into view.
///
/// Offsets accumulate: a mesh that has been spun twice keeps `2 *
/// SPIN_AMOUNT` on top of its time-based rotation. The first observed
/// section never spins.
#[derive(Debug, Clone)]
pub struct SectionSpin {
    enabled: bool,
    duration: f32,
    easing: EasingFunction,
    current_section: Option<usize>,
    meshes: Vec<MeshSpin>,
}

impl SectionSpin {
    /// Spin tracker for `mesh_count` meshes.
    #[must_use]
    pub fn new(mesh_count: usize, enabled: bool, duration: f32) -> Self {
        Self {
            enabled,
            duration: duration.max(f32::EPSILON),
            easing: EasingFunction::QuadraticInOut,
            current_section: None,
            meshes: vec![MeshSpin::default(); mesh_count],
        }
    }

    /// Use `easing` for spins from now on.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Update settings. Disabling drops all accumulated spin.
    pub fn configure(
        &mut self,
        enabled: bool,
        duration: f32,
        easing: EasingFunction,
    ) {
        if self.enabled && !enabled {
            self.meshes.fill(MeshSpin::default());
            self.current_section = None;
        }
        self.enabled = enabled;
        self.duration = duration.max(f32::EPSILON);
        self.easing = easing;
    }

    /// Record the section in view; starts a spin when it changed.
    pub fn observe(&mut self, section: usize, elapsed: f32) {
        if !self.enabled || self.current_section == Some(section) {
            return;
        }
        let first = self.current_section.is_none();
        self.current_section = Some(section);
        if first {
            return;
        }
        if let Some(mesh) = self.meshes.get_mut(section) {
            // A spin interrupted mid-way still completes its full turn.
            if mesh.started.take().is_some() {
                mesh.settled += SPIN_AMOUNT;
            }
            mesh.started = Some(elapsed);
            log::debug!("section {section} entered, spinning mesh");
        }
    }

    /// Extra rotation for mesh `index` at `elapsed`.
    pub fn offset(&mut self, index: usize, elapsed: f32) -> Vec3 {
        if !self.enabled {
            return Vec3::ZERO;
        }
        let Some(mesh) = self.meshes.get_mut(index) else {
            return Vec3::ZERO;
        };
        match mesh.started {
            Some(start) => {
                let progress = (elapsed - start) / self.duration;
                if progress >= 1.0 {
                    mesh.settled += SPIN_AMOUNT;
                    mesh.started = None;
                    mesh.settled
                } else {
                    mesh.settled + SPIN_AMOUNT * self.easing.evaluate(progress)
                }
            }
            None => mesh.settled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_spin_is_always_zero() {
        let mut spin = SectionSpin::new(3, false, 1.5);
        spin.observe(0, 0.0);
        spin.observe(1, 1.0);
        assert_eq!(spin.offset(1, 1.5), Vec3::ZERO);
    }

    #[test]
    fn first_section_does_not_spin() {
        let mut spin = SectionSpin::new(3, true, 1.5);
        spin.observe(1, 0.0);
        assert_eq!(spin.offset(1, 0.5), Vec3::ZERO);
    }

    #[test]
    fn entering_a_section_spins_its_mesh() {
        let mut spin = SectionSpin::new(3, true, 2.0);
        spin.observe(0, 0.0);
        spin.observe(1, 10.0);

        assert_eq!(spin.offset(1, 10.0), Vec3::ZERO);
        let halfway = spin.offset(1, 11.0);
        assert!((halfway - SPIN_AMOUNT * 0.5).length() < 1e-5);
        assert_eq!(spin.offset(1, 12.5), SPIN_AMOUNT);
        // Other meshes are untouched
        assert_eq!(spin.offset(0, 11.0), Vec3::ZERO);
    }

    #[test]
    fn interrupted_spin_still_completes() {
        let mut spin = SectionSpin::new(3, true, 2.0);
        spin.observe(0, 0.0);
        spin.observe(1, 1.0);
        spin.observe(0, 1.5);
        spin.observe(1, 2.0);
        assert_eq!(spin.offset(1, 5.0), SPIN_AMOUNT * 2.0);
    }

    #[test]
    fn out_of_range_section_is_ignored() {
        let mut spin = SectionSpin::new(3, true, 1.0);
        spin.observe(0, 0.0);
        spin.observe(7, 1.0);
        assert_eq!(spin.offset(7, 1.5), Vec3::ZERO);
    }

    #[test]
    fn spin_follows_configured_curve() {
        let mut spin =
            SectionSpin::new(3, true, 2.0).with_easing(EasingFunction::Linear);
        spin.observe(0, 0.0);
        spin.observe(1, 0.0);
        assert_eq!(spin.offset(1, 0.5), SPIN_AMOUNT * 0.25);

        spin.configure(true, 2.0, EasingFunction::QuadraticOut);
        // 1 - (1 - 0.5)^2
        assert_eq!(spin.offset(1, 1.0), SPIN_AMOUNT * 0.75);
    }
}
