// hs-core/src/units.rs
//
// Profiles are computed in CGS. uom is used at the input boundary to bring
// SI quantities into the internal system.

use uom::si::f64::{
    Acceleration as UomAcceleration, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure,
};

pub type Accel = UomAcceleration;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

/// Magnitudes in the internal CGS system.
pub mod cgs {
    use super::*;

    #[inline]
    pub fn length(l: Length) -> f64 {
        l.get::<uom::si::length::centimeter>()
    }

    #[inline]
    pub fn density(rho: Density) -> f64 {
        rho.get::<uom::si::mass_density::gram_per_cubic_centimeter>()
    }

    #[inline]
    pub fn pressure(p: Pressure) -> f64 {
        p.get::<uom::si::pressure::dyne_per_square_centimeter>()
    }

    #[inline]
    pub fn accel(g: Accel) -> f64 {
        g.get::<uom::si::acceleration::centimeter_per_second_squared>()
    }
}

/// Physical constants in CGS.
pub mod constants {
    /// Boltzmann constant [erg/K]
    pub const K_B: f64 = 1.380_649e-16;

    /// Atomic mass unit [g]
    pub const M_U: f64 = 1.660_539_066_60e-24;

    /// Radiation constant a = 4 sigma / c [erg/(cm^3 K^4)]
    pub const A_RAD: f64 = 7.565_733e-15;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_to_cgs_conversions() {
        assert!((cgs::length(m(1.0)) - 100.0).abs() < 1e-12);
        assert!((cgs::density(kg_per_m3(1000.0)) - 1.0).abs() < 1e-12);
        assert!((cgs::pressure(pa(1.0)) - 10.0).abs() < 1e-12);
        assert!((cgs::accel(mps2(9.80665)) - 980.665).abs() < 1e-9);
    }
}
