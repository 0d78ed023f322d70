use clap::Args;
use log::debug;

use sf_energy::{EnergyError, Mode};
use sf_fold::FoldOptions;

/// Minimum free energy folding parameters.
#[derive(Debug, Args)]
pub struct FoldArguments {
    /// Temperature in Celsius
    #[arg(short, long, default_value = "37.0")]
    pub temperature: f64,

    /// Parameter set: dna or rna
    #[arg(short, long, default_value = "dna")]
    pub mode: String,

    /// Force the first STEM bases to pair with the last STEM bases
    #[arg(long, value_name = "STEM", default_value_t = 0)]
    pub stem: usize,

    /// Most arms per multi-branch loop; combinations blow up beyond ~6
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub max_branches: usize,
}

impl FoldArguments {
    /// Resolve the arguments into fold options. The mode string is checked
    /// here, before any folding work starts.
    pub fn build_options(&self) -> Result<FoldOptions, EnergyError> {
        let mode = Mode::try_from(self.mode.as_str())?;
        debug!("Parameter set: {}", mode);
        debug!("Temperature: {} °C", self.temperature);
        Ok(FoldOptions {
            temperature: self.temperature,
            stem: self.stem,
            max_branches: self.max_branches,
            mode,
        })
    }
}
