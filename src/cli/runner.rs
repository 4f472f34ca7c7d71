use tracing::info;
use tracing_subscriber::EnvFilter;

use ressel::{Dimensions, MAX_MAX_PIXELS, MIN_MAX_PIXELS, ResizePlan, ResizePolicy};

use super::args::{CliArgs, Command, Source};
use super::errors::AppError;

/// Map a subcommand onto the policy it selects, validating the source.
fn policy_for(command: &Command) -> Result<(Dimensions, ResizePolicy<'static>), AppError> {
    match command {
        Command::Height { source, preset } => {
            Ok((dimensions(source)?, ResizePolicy::height_preset(*preset)))
        }
        Command::Budget {
            source,
            max_pixels,
            alignment,
        } => {
            if !(MIN_MAX_PIXELS..=MAX_MAX_PIXELS).contains(max_pixels) {
                return Err(AppError::BudgetOutOfRange {
                    value: *max_pixels,
                    min: MIN_MAX_PIXELS,
                    max: MAX_MAX_PIXELS,
                });
            }
            Ok((
                dimensions(source)?,
                ResizePolicy::PixelBudget {
                    max_pixels: *max_pixels,
                    alignment: *alignment,
                },
            ))
        }
        Command::Preset {
            source,
            table,
            tie_break,
        } => Ok((
            dimensions(source)?,
            ResizePolicy::nearest_preset(*table, *tie_break),
        )),
    }
}

fn dimensions(source: &Source) -> Result<Dimensions, ressel::Error> {
    Dimensions::validated(source.width, source.height)
}

fn render(plan: &ResizePlan, json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(plan)?);
    }
    let action = if plan.needs_resize() {
        format!("resize to {} ({})", plan.resize_to(), plan.method)
    } else {
        "pass through".to_string()
    };
    Ok(format!("{}\n{action}", plan.result))
}

/// `RUST_LOG` directives when set and valid, otherwise DEBUG.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("debug"))
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
            .init();
    }

    let (original, policy) = policy_for(&args.command)?;
    let plan = policy.plan(original, args.method)?;
    info!(
        original = %plan.result.original,
        target = %plan.resize_to(),
        needs_resize = plan.needs_resize(),
        "resolved resize plan"
    );

    println!("{}", render(&plan, args.json)?);
    Ok(())
}
