use uom::{
    ConstZero,
    si::{
        f64::{Energy, MassRate, Power, SpecificHeatCapacity, ThermodynamicTemperature, Time},
        time::hour,
    },
};

use super::GlheResponse;

/// Hourly histories from one annual run.
///
/// Entry `h` of each temperature history is the loop state after hour `h`
/// was processed. All four series have one entry per simulated hour.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualResults {
    /// Ground response the run used.
    pub response: GlheResponse,
    /// Loop specific heat, evaluated at the initial loop temperature.
    pub specific_heat: SpecificHeatCapacity,
    /// Sized loop mass flow rate.
    pub mass_rate: MassRate,
    /// Heat pump inlet temperature after each hour.
    pub heat_pump_inlet: Vec<ThermodynamicTemperature>,
    /// GLHE inlet temperature after each hour.
    pub glhe_inlet: Vec<ThermodynamicTemperature>,
    /// Heat pump loop demand for each hour.
    pub loop_demand: Vec<Power>,
    /// Ground load for each hour, the series used for GLHE sizing.
    pub ground_loads: Vec<Power>,
}

impl AnnualResults {
    /// Number of hours recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ground_loads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ground_loads.is_empty()
    }

    /// Peaks and annual totals of the ground load series.
    #[must_use]
    pub fn ground_load_summary(&self) -> GroundLoadSummary {
        GroundLoadSummary::from_hourly(&self.ground_loads)
    }
}

/// Peak and annual ground loads, split by direction.
///
/// Rejection is heat passed from the loop into the ground; extraction is heat
/// drawn from the ground into the loop. All values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundLoadSummary {
    pub peak_rejection: Power,
    pub peak_extraction: Power,
    pub annual_rejected: Energy,
    pub annual_extracted: Energy,
}

impl GroundLoadSummary {
    /// Summarizes an hourly ground load series.
    #[must_use]
    pub fn from_hourly(ground_loads: &[Power]) -> Self {
        let step = Time::new::<hour>(1.0);

        let mut summary = Self {
            peak_rejection: Power::ZERO,
            peak_extraction: Power::ZERO,
            annual_rejected: Energy::ZERO,
            annual_extracted: Energy::ZERO,
        };

        for &load in ground_loads {
            if load > Power::ZERO {
                if load > summary.peak_rejection {
                    summary.peak_rejection = load;
                }
                summary.annual_rejected += load * step;
            } else if load < Power::ZERO {
                let extraction = -load;
                if extraction > summary.peak_extraction {
                    summary.peak_extraction = extraction;
                }
                summary.annual_extracted += extraction * step;
            }
        }

        summary
    }
}
