//! Conversion options

use crate::adaptation::{ChromaticAdaptation, LmsAdaptationMatrix, VonKriesAdaptation};
use crate::color::white_point::{C, D50, D65};
use crate::color::working_space::SRGB;
use crate::color::{RgbWorkingSpace, WhitePoint};
use std::sync::Arc;

/// Which chromatic adaptation a converter performs
#[derive(Debug, Clone, Default)]
pub enum Adaptation {
    /// Von Kries over [`ConverterOptions::lms_matrix`], resolved when the
    /// converter is built
    #[default]
    VonKries,
    /// A caller-supplied model
    Custom(Arc<dyn ChromaticAdaptation>),
    /// Values keep their numbers when moved between reference whites
    Disabled,
}

impl Adaptation {
    /// The model to run, given the cone basis of the options
    pub(crate) fn resolve(
        &self,
        lms_matrix: LmsAdaptationMatrix,
    ) -> Option<Arc<dyn ChromaticAdaptation>> {
        match self {
            Self::VonKries => Some(Arc::new(VonKriesAdaptation::from_preset(lms_matrix))),
            Self::Custom(model) => Some(Arc::clone(model)),
            Self::Disabled => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Options for a [`ColorSpaceConverter`](crate::convert::ColorSpaceConverter)
///
/// Each white point is the reference white that values of the matching
/// model are interpreted relative to.
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Reference white of XYZ, xyY and LMS values (default D65)
    pub white_point: WhitePoint,
    /// Reference white of Lab and LCh(ab) values (default D50)
    pub lab_white_point: WhitePoint,
    /// Reference white of Luv and LCh(uv) values (default D65)
    pub luv_white_point: WhitePoint,
    /// Reference white of Hunter Lab values (default C)
    pub hunter_lab_white_point: WhitePoint,
    /// Working space of RGB, linear RGB and the RGB-derived models
    /// (default sRGB)
    pub rgb_working_space: RgbWorkingSpace,
    /// Adaptation model (default von Kries over `lms_matrix`)
    pub chromatic_adaptation: Adaptation,
    /// Cone basis of the XYZ ↔ LMS hops, and of the adaptation when
    /// `chromatic_adaptation` is [`Adaptation::VonKries`] (default Bradford)
    pub lms_matrix: LmsAdaptationMatrix,
}

impl ConverterOptions {
    /// Use von Kries adaptation over `preset` for both adaptation and the
    /// XYZ ↔ LMS hops
    pub fn with_adaptation_model(mut self, preset: LmsAdaptationMatrix) -> Self {
        self.lms_matrix = preset;
        self.chromatic_adaptation = Adaptation::VonKries;
        self
    }

    /// Use a custom adaptation model
    ///
    /// `lms_matrix` is left as is and from then on only sets the basis of
    /// the XYZ ↔ LMS hops (`xyz_to_lms`, `lms_to_xyz`); `model` alone
    /// decides how colors are adapted.
    pub fn with_chromatic_adaptation(mut self, model: Arc<dyn ChromaticAdaptation>) -> Self {
        self.chromatic_adaptation = Adaptation::Custom(model);
        self
    }

    /// Disable chromatic adaptation
    pub fn without_adaptation(mut self) -> Self {
        self.chromatic_adaptation = Adaptation::Disabled;
        self
    }
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            white_point: D65,
            lab_white_point: D50,
            luv_white_point: D65,
            hunter_lab_white_point: C,
            rgb_working_space: SRGB,
            chromatic_adaptation: Adaptation::default(),
            lms_matrix: LmsAdaptationMatrix::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Xyz;

    #[test]
    fn test_defaults() {
        let opts = ConverterOptions::default();
        assert_eq!(opts.white_point, D65);
        assert_eq!(opts.lab_white_point, D50);
        assert_eq!(opts.luv_white_point, D65);
        assert_eq!(opts.hunter_lab_white_point, C);
        assert_eq!(opts.rgb_working_space, SRGB);
        assert_eq!(opts.lms_matrix, LmsAdaptationMatrix::Bradford);
        assert!(matches!(opts.chromatic_adaptation, Adaptation::VonKries));
    }

    #[test]
    fn test_builders() {
        let opts = ConverterOptions::default().with_adaptation_model(LmsAdaptationMatrix::Cat02);
        assert_eq!(opts.lms_matrix, LmsAdaptationMatrix::Cat02);
        assert!(matches!(opts.chromatic_adaptation, Adaptation::VonKries));

        let opts = opts.without_adaptation();
        assert!(!opts.chromatic_adaptation.is_enabled());
        assert_eq!(opts.lms_matrix, LmsAdaptationMatrix::Cat02);
    }

    #[test]
    fn test_custom_model_leaves_lms_matrix() {
        let model = Arc::new(VonKriesAdaptation::from_preset(LmsAdaptationMatrix::VonKriesHpe));
        let opts = ConverterOptions::default()
            .with_adaptation_model(LmsAdaptationMatrix::Cat02)
            .with_chromatic_adaptation(model);
        assert_eq!(opts.lms_matrix, LmsAdaptationMatrix::Cat02);
        assert!(matches!(opts.chromatic_adaptation, Adaptation::Custom(_)));
    }

    #[test]
    fn test_resolve_follows_lms_matrix() {
        let color = Xyz::new(0.4, 0.3, 0.2);
        for preset in LmsAdaptationMatrix::ALL {
            let model = Adaptation::VonKries.resolve(preset).unwrap();
            let engine = VonKriesAdaptation::from_preset(preset);
            let expected = engine.transform(color, D65.xyz, D50.xyz);
            assert_eq!(model.transform(color, D65.xyz, D50.xyz), expected, "{}", preset);
        }
        assert!(Adaptation::Disabled.resolve(LmsAdaptationMatrix::Bradford).is_none());
    }
}
