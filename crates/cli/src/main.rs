//! Lutsmith command-line tool
//!
//! Generates fixed-point atan lookup tables as VHDL ROM modules.
//!
//! # Usage
//!
//! ```bash
//! # Generate the default 4096-entry, 8-bit atan table
//! lutsmith generate
//!
//! # Custom widths, custom output directory
//! lutsmith generate --integer-bits 4 --frac-bits 3 --out-dir build/
//!
//! # Inspect the boundary constants at the output precision
//! lutsmith constants
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use lutsmith_fixed_point::FixedFormat;
use lutsmith_lut::{encode_constants, generate, LutConfig, REFERENCE_CONSTANTS};
use lutsmith_vhdl::{default_module_name, RomModule};

#[derive(Parser)]
#[command(name = "lutsmith")]
#[command(version)]
#[command(about = "Fixed-point lookup table generator for hardware ROMs")]
struct Cli {
    /// Log every table entry as it is generated
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an atan LUT as a VHDL ROM module
    Generate {
        /// Integer bits of the input format (sign bit excluded)
        #[arg(long, default_value = "5")]
        integer_bits: u32,

        /// Fractional bits of the input format
        #[arg(long, default_value = "6")]
        frac_bits: u32,

        /// Integer bits of the output format (sign bit excluded)
        #[arg(long, default_value = "2")]
        output_integer_bits: u32,

        /// Fractional bits of the output format
        #[arg(long, default_value = "5")]
        output_frac_bits: u32,

        /// Load the formats from a JSON config instead of the width flags
        #[arg(long)]
        config: Option<PathBuf>,

        /// Module name prefix
        #[arg(long, default_value = "atan_lut")]
        name: String,

        /// Directory the .vhd file is written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print fixed-point encodings of the atan boundary constants
    Constants {
        /// Integer bits of the output format (sign bit excluded)
        #[arg(long, default_value = "2")]
        output_integer_bits: u32,

        /// Fractional bits of the output format
        #[arg(long, default_value = "5")]
        output_frac_bits: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    match cli.command {
        Commands::Generate {
            integer_bits,
            frac_bits,
            output_integer_bits,
            output_frac_bits,
            config,
            name,
            out_dir,
        } => {
            let lut_config = match config {
                Some(path) => LutConfig::from_json_file(path)?,
                None => LutConfig::new(
                    FixedFormat::new(integer_bits, frac_bits),
                    FixedFormat::new(output_integer_bits, output_frac_bits),
                ),
            };
            run_generate(lut_config, &name, &out_dir)?;
        }
        Commands::Constants {
            output_integer_bits,
            output_frac_bits,
        } => {
            run_constants(FixedFormat::new(output_integer_bits, output_frac_bits))?;
        }
    }

    Ok(())
}

fn run_generate(config: LutConfig, prefix: &str, out_dir: &Path) -> Result<()> {
    config.validate()?;

    tracing::info!(
        input = %config.input,
        output = %config.output,
        entries = config.num_entries(),
        "generating atan table"
    );

    let entries = generate(&config, f64::atan)?;

    for entry in &entries {
        tracing::debug!(
            address = entry.address,
            input = %entry.input.fixed_point_string(),
            value = entry.input.to_real(),
            output = %entry.output.fixed_point_string(),
            quantized = entry.quantized,
            "entry"
        );
    }

    let module = RomModule::new(default_module_name(prefix, &config), config, &entries)?;
    let path = module.write_to_file(out_dir)?;

    tracing::info!(path = %path.display(), "wrote module");
    println!("{}", path.display());

    Ok(())
}

fn run_constants(format: FixedFormat) -> Result<()> {
    format.validate()?;

    for report in encode_constants(format, &REFERENCE_CONSTANTS)? {
        println!("{report}");
    }

    Ok(())
}
