//! Generic conversion between any two color models
//!
//! Each value type states how it reaches XYZ under a converter's
//! configuration. Types that are plain functions of companded RGB also
//! declare themselves part of the RGB family, so conversions among them
//! skip the XYZ hop entirely.

use crate::color::{
    Cmyk, Hsl, Hsv, HunterLab, Lab, Lch, Lchuv, LinearRgb, Lms, Luv, Rgb, XyY, Xyz, YCbCr,
};
use crate::convert::ColorSpaceConverter;
use std::any::Any;

/// A color model the [`ColorSpaceConverter`] can convert to and from
pub trait ColorSpace: Copy + Send + Sync + 'static {
    /// Whether values are a function of companded RGB alone
    const RGB_FAMILY: bool = false;

    /// XYZ relative to the converter's `white_point`
    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz;

    /// From XYZ relative to the converter's `white_point`
    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self;

    /// Companded RGB in the converter's working space
    fn to_rgb_with(&self, converter: &ColorSpaceConverter) -> Rgb {
        converter.xyz_to_rgb(self.to_xyz_with(converter))
    }

    /// From companded RGB in the converter's working space
    fn from_rgb_with(rgb: Rgb, converter: &ColorSpaceConverter) -> Self {
        Self::from_xyz_with(converter.rgb_to_xyz(rgb), converter)
    }
}

impl ColorSpaceConverter {
    /// Convert `color` from model `S` to model `D`
    ///
    /// Converting a type to itself returns the value unchanged.
    pub fn convert<S: ColorSpace, D: ColorSpace>(&self, color: S) -> D {
        if let Some(same) = (&color as &dyn Any).downcast_ref::<D>() {
            return *same;
        }
        if S::RGB_FAMILY && D::RGB_FAMILY {
            D::from_rgb_with(color.to_rgb_with(self), self)
        } else {
            D::from_xyz_with(color.to_xyz_with(self), self)
        }
    }
}

impl ColorSpace for Xyz {
    fn to_xyz_with(&self, _: &ColorSpaceConverter) -> Xyz {
        *self
    }

    fn from_xyz_with(xyz: Xyz, _: &ColorSpaceConverter) -> Self {
        xyz
    }
}

impl ColorSpace for XyY {
    fn to_xyz_with(&self, _: &ColorSpaceConverter) -> Xyz {
        self.to_xyz()
    }

    fn from_xyz_with(xyz: Xyz, _: &ColorSpaceConverter) -> Self {
        XyY::from_xyz(xyz)
    }
}

impl ColorSpace for Lms {
    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
        converter.lms_to_xyz(*self)
    }

    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
        converter.xyz_to_lms(xyz)
    }
}

impl ColorSpace for Lab {
    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
        converter.lab_to_xyz(*self)
    }

    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
        converter.xyz_to_lab(xyz)
    }
}

impl ColorSpace for Lch {
    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
        converter.lab_to_xyz(self.to_lab())
    }

    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
        Lch::from_lab(converter.xyz_to_lab(xyz))
    }
}

impl ColorSpace for Luv {
    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
        converter.luv_to_xyz(*self)
    }

    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
        converter.xyz_to_luv(xyz)
    }
}

impl ColorSpace for Lchuv {
    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
        converter.luv_to_xyz(self.to_luv())
    }

    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
        Lchuv::from_luv(converter.xyz_to_luv(xyz))
    }
}

impl ColorSpace for HunterLab {
    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
        converter.hunter_lab_to_xyz(*self)
    }

    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
        converter.xyz_to_hunter_lab(xyz)
    }
}

impl ColorSpace for LinearRgb {
    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
        converter.linear_rgb_to_xyz(*self)
    }

    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
        converter.xyz_to_linear_rgb(xyz)
    }

    fn to_rgb_with(&self, converter: &ColorSpaceConverter) -> Rgb {
        converter.linear_rgb_to_rgb(*self)
    }

    fn from_rgb_with(rgb: Rgb, converter: &ColorSpaceConverter) -> Self {
        converter.rgb_to_linear_rgb(rgb)
    }
}

impl ColorSpace for Rgb {
    const RGB_FAMILY: bool = true;

    fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
        converter.rgb_to_xyz(*self)
    }

    fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
        converter.xyz_to_rgb(xyz)
    }

    fn to_rgb_with(&self, _: &ColorSpaceConverter) -> Rgb {
        *self
    }

    fn from_rgb_with(rgb: Rgb, _: &ColorSpaceConverter) -> Self {
        rgb
    }
}

/// Models that are closed-form functions of companded RGB
macro_rules! rgb_family {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ColorSpace for $ty {
                const RGB_FAMILY: bool = true;

                fn to_xyz_with(&self, converter: &ColorSpaceConverter) -> Xyz {
                    converter.rgb_to_xyz(self.to_rgb())
                }

                fn from_xyz_with(xyz: Xyz, converter: &ColorSpaceConverter) -> Self {
                    <$ty>::from_rgb(converter.xyz_to_rgb(xyz))
                }

                fn to_rgb_with(&self, _: &ColorSpaceConverter) -> Rgb {
                    self.to_rgb()
                }

                fn from_rgb_with(rgb: Rgb, _: &ColorSpaceConverter) -> Self {
                    <$ty>::from_rgb(rgb)
                }
            }
        )+
    };
}

rgb_family!(Hsl, Hsv, Cmyk, YCbCr);
