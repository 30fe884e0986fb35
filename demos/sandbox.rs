use field_sandbox::io::{write_charges_csv, write_glyphs_csv};
use field_sandbox::sandbox::{Sandbox, SandboxConfig};
use field_sandbox::viewport::Viewport;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let mut sb = Sandbox::with_demo_charges(SandboxConfig::default())?;

    // Rejected like an empty form field would be.
    if let Err(err) = sb.add_charge_parsed("abc", "0", "0") {
        eprintln!("ignored: {err}");
    }
    sb.add_charge_parsed("0.5", "0", "3")?;

    // Drag the first charge across a 600x600 canvas.
    let canvas = Viewport::new(0.0, 0.0, 600.0, 600.0);
    let first = sb.list_charges()[0].id;
    sb.begin_drag(first);
    for step in 0..5 {
        let px = 150.0 + 30.0 * step as f64;
        sb.drag_to(px, 200.0, Some(&canvas));
    }
    sb.end_drag();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_charges_csv(&mut out, sb.list_charges())?;
    write_glyphs_csv(&mut out, &sb.frame().glyphs)?;
    eprintln!("{} recomputations", sb.recompute_count());
    Ok(())
}
