use indicatif::{ProgressBar, ProgressStyle};
use pintograph::{plot, ClockState, Engine, Frame, PintoConfig, Signals, TickResult};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

type AnyResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

const APP_NAME: &str = env!("CARGO_BIN_NAME");

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, author, about)]
pub(crate) struct Entry {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(clap::Subcommand)]
enum Cmd {
    /// Trace the pen path without the animation clock
    Trace(Trace),
    /// Run the wall-clock simulation and export the traced path
    Run(Run),
    /// Write an example configuration file
    Example {
        /// Output path
        path: PathBuf,
    },
}

#[derive(clap::Args)]
struct Trace {
    /// Mechanism configuration (RON)
    cfg: PathBuf,
    /// Traced duration in seconds
    #[clap(long, default_value_t = 10.)]
    duration: f64,
    /// Samples over the duration
    #[clap(long, default_value_t = 1440)]
    res: usize,
    /// Write the curve as SVG
    #[clap(long)]
    svg: Option<PathBuf>,
    /// Write the curve as CSV
    #[clap(long)]
    csv: Option<PathBuf>,
}

#[derive(clap::Args)]
struct Run {
    /// Mechanism configuration (RON)
    cfg: PathBuf,
    /// Run window in seconds
    #[clap(long, default_value_t = 10.)]
    runtime: f64,
    /// Ticks per second
    #[clap(long, default_value_t = 60.)]
    fps: f64,
    /// Write the final state and path as SVG
    #[clap(long)]
    svg: Option<PathBuf>,
    /// Write the path as CSV
    #[clap(long)]
    csv: Option<PathBuf>,
}

impl Entry {
    pub(super) fn main() {
        register_panic_hook();
        let entry = <Self as clap::Parser>::parse();
        let res = match entry.cmd {
            Cmd::Trace(t) => trace(t),
            Cmd::Run(r) => run(r),
            Cmd::Example { path } => example(&path),
        };
        if let Err(e) = res {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn register_panic_hook() {
    // Print panic messages without stack trace
    std::panic::set_hook(Box::new(|info| {
        match info.payload().downcast_ref::<&str>() {
            Some(s) => eprintln!("{s}"),
            None => eprintln!("{info}"),
        }
        std::process::exit(1);
    }));
}

fn load_cfg(path: &Path) -> AnyResult<PintoConfig> {
    let s = std::fs::read_to_string(path)?;
    Ok(ron::from_str(&s)?)
}

fn example(path: &Path) -> AnyResult {
    let cfg = ron::ser::to_string_pretty(&PintoConfig::example(), Default::default())?;
    std::fs::write(path, cfg)?;
    println!("example configuration saved to {}", path.display());
    Ok(())
}

fn trace(t: Trace) -> AnyResult {
    let mech = load_cfg(&t.cfg)?.validated()?;
    println!("duration={}, res={}", t.duration, t.res);
    let curve = mech.curve(t.duration, t.res);
    if curve.len() < t.res {
        println!("skipped {} degenerate samples", t.res - curve.len());
    }
    if let Some(path) = t.svg {
        let svg = plot::SVGBackend::new(&path, (800, 800));
        plot::curves(svg, "Pen path", &[("Pen", &curve)])?;
        println!("saved {}", path.display());
    }
    if let Some(path) = t.csv {
        std::fs::write(&path, pintograph::csv::dump_csv(curve.iter().copied())?)?;
        println!("saved {}", path.display());
    }
    Ok(())
}

fn run(r: Run) -> AnyResult {
    let cfg = load_cfg(&r.cfg)?;
    // fail on a bad mechanism before the clock starts
    cfg.validated()?;
    println!("runtime={}, fps={}", r.runtime, r.fps);
    const STYLE: &str = "{elapsed_precise} {wide_bar} {msg}";
    let pb = ProgressBar::new((r.runtime * 1000.) as u64);
    pb.set_style(ProgressStyle::with_template(STYLE)?);
    let interval = Duration::from_secs_f64(1. / r.fps);
    let mut engine = Engine::default();
    let mut sig = Signals { start: true, reset: true, runtime: r.runtime };
    let mut out: Option<TickResult> = None;
    loop {
        let res = engine.tick(&cfg, sig, Instant::now())?;
        sig.reset = false;
        if engine.state() != ClockState::Running {
            break;
        }
        pb.set_position((res.time * 1000.) as u64);
        pb.set_message(format!("{} points", res.path.len()));
        out = Some(res);
        std::thread::sleep(interval);
    }
    pb.finish();
    let Some(TickResult { frame: Some(frame), path, .. }) = out else {
        return Err("the run produced no frames".into());
    };
    export(&frame, &path, r.svg.as_deref(), r.csv.as_deref())
}

fn export(frame: &Frame, path: &[[f64; 2]], svg: Option<&Path>, csv: Option<&Path>) -> AnyResult {
    if let Some(file) = svg {
        let backend = plot::SVGBackend::new(file, (800, 800));
        plot::frame(backend, "Pintograph", frame, path)?;
        println!("saved {}", file.display());
    }
    if let Some(file) = csv {
        std::fs::write(file, pintograph::csv::dump_csv(path.iter().copied())?)?;
        println!("saved {}", file.display());
    }
    Ok(())
}
