use crate::flags::DynarrayCmd;
use dynarray::{DynamicArray, ResizePolicy};
use miette::{Context, IntoDiagnostic};
use std::path::Path;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

mod flags;
mod report;
mod script;

const DEFAULT_COUNT: usize = 1024;
/// Growth is reported from the smallest possible array
const DEFAULT_ANALYZE_CAPACITY: usize = 1;
const DEFAULT_REPLAY_CAPACITY: usize = 4;

fn main() -> miette::Result<()> {
    color_backtrace::install();

    let flags = flags::Dynarray::from_env_or_exit();
    init_logging(flags.verbose)?;

    let policy = load_policy(flags.config.as_deref())?;

    match flags.subcommand {
        DynarrayCmd::Analyze(cmd) => {
            let report = report::analyze(
                policy,
                cmd.capacity.unwrap_or(DEFAULT_ANALYZE_CAPACITY),
                cmd.count.unwrap_or(DEFAULT_COUNT),
            )?;
            print!("{report}");
        }
        DynarrayCmd::Drain(cmd) => {
            let report = report::drain(policy, cmd.count.unwrap_or(DEFAULT_COUNT))?;
            print!("{report}");
        }
        DynarrayCmd::Replay(cmd) => {
            let src = fs_err::read_to_string(&cmd.script)
                .into_diagnostic()
                .context("failed to read edit script")?;
            let lines = script::parse_script(&src)?;

            let mut arr = DynamicArray::with_policy(
                cmd.capacity.unwrap_or(DEFAULT_REPLAY_CAPACITY),
                policy,
            )?;
            for line in lines {
                println!("{:>4} | {}", line.number, script::execute(&mut arr, line.step));
            }
            info!(stats = %arr.stats(), "Replay finished");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) -> miette::Result<()> {
    let default_level = if verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        );

    tracing::subscriber::set_global_default(subscriber).into_diagnostic()
}

fn load_policy(path: Option<&Path>) -> miette::Result<ResizePolicy> {
    let Some(path) = path else {
        return Ok(ResizePolicy::default());
    };

    let config = fs_err::read_to_string(path)
        .into_diagnostic()
        .context("failed to read resize policy")?;

    let policy: ResizePolicy = toml::de::from_str(&config)
        .into_diagnostic()
        .context("failed to parse resize policy")?;
    policy.validate()?;

    info!(?policy, "Loaded resize policy");
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use crate::load_policy;
    use dynarray::{CapacityFloor, DynamicArray, ResizePolicy};
    use std::path::Path;

    fn script_path(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("scripts").join(name)
    }

    #[test]
    fn bundled_policy_loads() {
        let policy = load_policy(Some(script_path("policy.toml").as_path())).unwrap();

        assert_eq!(
            policy,
            ResizePolicy {
                floor: CapacityFloor::Initial,
                ..Default::default()
            }
        );

        let mut arr = DynamicArray::with_policy(8, policy).unwrap();
        arr.extend(0..32);
        while arr.len() > 1 {
            arr.pop();
        }
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn missing_config_uses_default_policy() {
        assert_eq!(load_policy(None).unwrap(), ResizePolicy::default());
    }

    #[test]
    fn unreadable_config_is_reported() {
        let err = load_policy(Some(script_path("missing.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read resize policy"));
    }

    #[test]
    fn non_policy_config_is_rejected() {
        let err = load_policy(Some(script_path("edits.txt").as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse resize policy"));
    }
}
