//! Fieldlab Application
//!
//! Console driver for the fieldlab field types. Constructs an electric and
//! a magnetic field, runs both magnitude calculations, sums a second pair
//! of fields via operator overloading, and prints the results.
//!
//! Diagnostics go to stderr; stdout carries only the demonstration output.
//!
//! # Usage
//!
//! ```bash
//! fieldlab
//!
//! # With debug logging on stderr
//! fieldlab --log-level debug
//! ```

use std::io::Write;

use clap::Parser;
use fieldlab_core::{ElectricField, MagneticField};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Fieldlab field demonstration
#[derive(Parser, Debug)]
#[command(name = "fieldlab")]
#[command(author, version, about = "Electric and magnetic field demonstration", long_about = None)]
struct Cli {
    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Log to stderr: stdout is the demonstration's output contract
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("fieldlab v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    run_demo(&mut stdout.lock())?;

    Ok(())
}

/// Run the field demonstration, writing the transcript to `out`.
fn run_demo(out: &mut impl Write) -> anyhow::Result<()> {
    let mut e1 = ElectricField::new(1e5, 10.9, 1.7e2);
    let mut b1 = MagneticField::new(2.5, 1.2, 0.8);

    writeln!(out, "Initial fields:")?;
    writeln!(out, "{}", e1.vector())?;
    writeln!(out, "{}", b1.vector())?;

    // 1 µC point charge and 10 A wire, both at 10 cm
    e1.calculate_field(1e-6, 0.1);
    b1.calculate_field(10.0, 0.1);
    debug!(
        electric_n_per_c = e1.calculated_field(),
        magnetic_t = b1.calculated_field(),
        "field magnitudes calculated"
    );

    writeln!(out)?;
    writeln!(out, "Calculated values:")?;
    writeln!(out, "Electric Field: {} N/C", e1.calculated_field())?;
    writeln!(out, "Magnetic Field: {} T", b1.calculated_field())?;

    let e2 = ElectricField::new(2e5, 5.5, 3e2);
    let e3 = e1 + e2;

    let b2 = MagneticField::new(1.5, 0.8, 0.4);
    let b3 = b1 + b2;

    writeln!(out)?;
    writeln!(out, "After operator overloading:")?;
    writeln!(out, "Electric Field Sum: {e3}")?;
    writeln!(out, "Magnetic Field Sum: {b3}")?;

    Ok(())
}
