//! The conversion facade
//!
//! Every conversion runs source → XYZ under the source's reference white →
//! chromatic adaptation when the whites differ → target. The converter is
//! an ordinary value: build one per configuration and share it by
//! reference (it is `Send + Sync`).

use crate::adaptation::{ChromaticAdaptation, XyzLmsConverter};
use crate::color::{
    HunterLab, Lab, Lch, Lchuv, LinearRgb, Lms, Luv, Rgb, RgbWorkingSpace, WhitePoint, Xyz,
};
use crate::convert::ConverterOptions;
use crate::error::{Error, Result};
use crate::math::Matrix3x3;
use std::sync::Arc;

/// Converts color values between models under a fixed configuration
#[derive(Debug, Clone)]
pub struct ColorSpaceConverter {
    options: ConverterOptions,
    adaptation: Option<Arc<dyn ChromaticAdaptation>>,
    lms: XyzLmsConverter,
    rgb_to_xyz: Matrix3x3,
    xyz_to_rgb: Matrix3x3,
}

impl ColorSpaceConverter {
    /// Build a converter
    ///
    /// Fails with [`Error::InvalidWhitePoint`] if any configured white has a
    /// zero, negative or non-finite component, and with
    /// [`Error::SingularMatrix`] if the working space primaries are
    /// degenerate.
    pub fn new(options: ConverterOptions) -> Result<Self> {
        validate_white("white_point", &options.white_point)?;
        validate_white("lab_white_point", &options.lab_white_point)?;
        validate_white("luv_white_point", &options.luv_white_point)?;
        validate_white("hunter_lab_white_point", &options.hunter_lab_white_point)?;
        validate_white(
            "rgb_working_space",
            &options.rgb_working_space.white_point,
        )?;

        let rgb_to_xyz = options.rgb_working_space.to_xyz_matrix()?;
        let xyz_to_rgb = rgb_to_xyz
            .inverse()
            .ok_or(Error::SingularMatrix("working space matrix"))?;

        Ok(Self {
            adaptation: options.chromatic_adaptation.resolve(options.lms_matrix),
            lms: XyzLmsConverter::from_preset(options.lms_matrix),
            options,
            rgb_to_xyz,
            xyz_to_rgb,
        })
    }

    /// The options this converter was built with
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Whether an adaptation model is configured
    pub fn is_chromatic_adaptation_performed(&self) -> bool {
        self.adaptation.is_some()
    }

    /// Adapt with the configured model; unchanged when adaptation is off
    #[inline]
    fn adapt_between(&self, color: Xyz, source: &WhitePoint, target: &WhitePoint) -> Xyz {
        match &self.adaptation {
            Some(model) => model.transform(color, source.xyz, target.xyz),
            None => color,
        }
    }

    /// True when a value relative to `source` has to be re-expressed
    /// relative to `target`
    #[inline]
    fn needs_adaptation(&self, source: &WhitePoint, target: &WhitePoint) -> bool {
        self.is_chromatic_adaptation_performed() && source.xyz != target.xyz
    }

    // ========================================================================
    // Adaptation
    // ========================================================================

    /// Adapt an XYZ value seen under `source_white` to the configured
    /// [`white_point`](ConverterOptions::white_point)
    pub fn adapt_xyz(&self, color: Xyz, source_white: &WhitePoint) -> Xyz {
        self.adapt_between(color, source_white, &self.options.white_point)
    }

    /// Adapt a Lab value relative to `source_white` to the configured Lab
    /// white
    pub fn adapt_lab(&self, color: Lab, source_white: &WhitePoint) -> Lab {
        let target = &self.options.lab_white_point;
        if !self.needs_adaptation(source_white, target) {
            return color;
        }
        let xyz = color.to_xyz(source_white);
        Lab::from_xyz(self.adapt_between(xyz, source_white, target), target)
    }

    pub fn adapt_lch(&self, color: Lch, source_white: &WhitePoint) -> Lch {
        if !self.needs_adaptation(source_white, &self.options.lab_white_point) {
            return color;
        }
        Lch::from_lab(self.adapt_lab(color.to_lab(), source_white))
    }

    /// Adapt a Luv value relative to `source_white` to the configured Luv
    /// white
    pub fn adapt_luv(&self, color: Luv, source_white: &WhitePoint) -> Luv {
        let target = &self.options.luv_white_point;
        if !self.needs_adaptation(source_white, target) {
            return color;
        }
        let xyz = color.to_xyz(source_white);
        Luv::from_xyz(self.adapt_between(xyz, source_white, target), target)
    }

    pub fn adapt_lchuv(&self, color: Lchuv, source_white: &WhitePoint) -> Lchuv {
        if !self.needs_adaptation(source_white, &self.options.luv_white_point) {
            return color;
        }
        Lchuv::from_luv(self.adapt_luv(color.to_luv(), source_white))
    }

    pub fn adapt_hunter_lab(&self, color: HunterLab, source_white: &WhitePoint) -> HunterLab {
        let target = &self.options.hunter_lab_white_point;
        if !self.needs_adaptation(source_white, target) {
            return color;
        }
        let xyz = color.to_xyz(source_white);
        HunterLab::from_xyz(self.adapt_between(xyz, source_white, target), target)
    }

    /// Re-express linear RGB from `source_space` in the configured working
    /// space
    ///
    /// The primaries are always converted; the white is adapted only when an
    /// adaptation model is configured.
    pub fn adapt_linear_rgb(
        &self,
        color: LinearRgb,
        source_space: &RgbWorkingSpace,
    ) -> Result<LinearRgb> {
        let target = &self.options.rgb_working_space;
        if source_space == target {
            return Ok(color);
        }
        let to_xyz = source_space.to_xyz_matrix()?;
        let xyz = Xyz::from_array(to_xyz.multiply_vec(color.to_array()));
        let adapted = self.adapt_between(xyz, &source_space.white_point, &target.white_point);
        Ok(LinearRgb::from_array(
            self.xyz_to_rgb.multiply_vec(adapted.to_array()),
        ))
    }

    /// Re-express companded RGB from `source_space` in the configured
    /// working space
    pub fn adapt_rgb(&self, color: Rgb, source_space: &RgbWorkingSpace) -> Result<Rgb> {
        if source_space == &self.options.rgb_working_space {
            return Ok(color);
        }
        let linear = expand(color, source_space);
        let adapted = self.adapt_linear_rgb(linear, source_space)?;
        Ok(self.linear_rgb_to_rgb(adapted))
    }

    // ========================================================================
    // XYZ hops
    // ========================================================================

    pub fn xyz_to_lab(&self, xyz: Xyz) -> Lab {
        let white = &self.options.lab_white_point;
        Lab::from_xyz(self.adapt_between(xyz, &self.options.white_point, white), white)
    }

    pub fn lab_to_xyz(&self, lab: Lab) -> Xyz {
        let white = &self.options.lab_white_point;
        self.adapt_between(lab.to_xyz(white), white, &self.options.white_point)
    }

    pub fn xyz_to_luv(&self, xyz: Xyz) -> Luv {
        let white = &self.options.luv_white_point;
        Luv::from_xyz(self.adapt_between(xyz, &self.options.white_point, white), white)
    }

    pub fn luv_to_xyz(&self, luv: Luv) -> Xyz {
        let white = &self.options.luv_white_point;
        self.adapt_between(luv.to_xyz(white), white, &self.options.white_point)
    }

    pub fn xyz_to_hunter_lab(&self, xyz: Xyz) -> HunterLab {
        let white = &self.options.hunter_lab_white_point;
        HunterLab::from_xyz(self.adapt_between(xyz, &self.options.white_point, white), white)
    }

    pub fn hunter_lab_to_xyz(&self, lab: HunterLab) -> Xyz {
        let white = &self.options.hunter_lab_white_point;
        self.adapt_between(lab.to_xyz(white), white, &self.options.white_point)
    }

    pub fn xyz_to_linear_rgb(&self, xyz: Xyz) -> LinearRgb {
        let white = &self.options.rgb_working_space.white_point;
        let adapted = self.adapt_between(xyz, &self.options.white_point, white);
        LinearRgb::from_array(self.xyz_to_rgb.multiply_vec(adapted.to_array()))
    }

    pub fn linear_rgb_to_xyz(&self, rgb: LinearRgb) -> Xyz {
        let white = &self.options.rgb_working_space.white_point;
        let xyz = Xyz::from_array(self.rgb_to_xyz.multiply_vec(rgb.to_array()));
        self.adapt_between(xyz, white, &self.options.white_point)
    }

    pub fn xyz_to_rgb(&self, xyz: Xyz) -> Rgb {
        self.linear_rgb_to_rgb(self.xyz_to_linear_rgb(xyz))
    }

    pub fn rgb_to_xyz(&self, rgb: Rgb) -> Xyz {
        self.linear_rgb_to_xyz(self.rgb_to_linear_rgb(rgb))
    }

    /// LMS in the configured cone basis; no adaptation is involved
    pub fn xyz_to_lms(&self, xyz: Xyz) -> Lms {
        self.lms.to_lms(xyz)
    }

    pub fn lms_to_xyz(&self, lms: Lms) -> Xyz {
        self.lms.to_xyz(lms)
    }

    // ========================================================================
    // Companding
    // ========================================================================

    /// Expand with the configured working space's companding
    pub fn rgb_to_linear_rgb(&self, rgb: Rgb) -> LinearRgb {
        expand(rgb, &self.options.rgb_working_space)
    }

    /// Compress with the configured working space's companding
    pub fn linear_rgb_to_rgb(&self, rgb: LinearRgb) -> Rgb {
        let c = self.options.rgb_working_space.companding;
        Rgb::new(c.compress(rgb.r), c.compress(rgb.g), c.compress(rgb.b))
    }
}

impl Default for ColorSpaceConverter {
    /// Default options; infallible since every default is a known-good preset
    fn default() -> Self {
        let options = ConverterOptions::default();
        let rgb_to_xyz = options.rgb_working_space.preset_to_xyz_matrix();
        Self {
            adaptation: options.chromatic_adaptation.resolve(options.lms_matrix),
            lms: XyzLmsConverter::from_preset(options.lms_matrix),
            options,
            rgb_to_xyz,
            xyz_to_rgb: rgb_to_xyz.inverse_const(),
        }
    }
}

#[inline]
fn expand(rgb: Rgb, space: &RgbWorkingSpace) -> LinearRgb {
    let c = space.companding;
    LinearRgb::new(c.expand(rgb.r), c.expand(rgb.g), c.expand(rgb.b))
}

fn validate_white(name: &'static str, white: &WhitePoint) -> Result<()> {
    if white.xyz.is_positive_finite() {
        Ok(())
    } else {
        Err(Error::InvalidWhitePoint {
            name,
            xyz: white.xyz,
        })
    }
}
