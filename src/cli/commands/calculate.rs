//! packcalc calculate - Work out the packs for one order

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{self, HumanLayout};
use crate::core::{Method, PackMap, PackSizeProvider, calculate_packs_with_provider};
use crate::error::Result;
use crate::storage::MemoryStore;

#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Number of items ordered
    #[arg(allow_negative_numbers = true)]
    pub order: i64,

    /// Pack sizes to use instead of the stored ones (comma separated)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub sizes: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct CalculationReport {
    pub order: i64,
    pub packs: PackMap,
    pub total_items: u64,
    pub total_packs: u64,
    pub method: Method,
    pub sizes: Vec<i64>,
}

pub fn run(ctx: &AppContext, args: &CalculateArgs) -> Result<()> {
    let provider: Box<dyn PackSizeProvider> = match &args.sizes {
        Some(sizes) => Box::new(MemoryStore::new(sizes.clone())),
        None => Box::new(ctx.open_database()?),
    };

    let (solved, sizes) =
        calculate_packs_with_provider(provider.as_ref(), args.order, &ctx.solve_options())?;
    let report = CalculationReport {
        order: args.order,
        packs: solved.packs,
        total_items: solved.total_items,
        total_packs: solved.total_packs,
        method: solved.method,
        sizes,
    };

    if ctx.robot_mode {
        return output::emit_robot(&output::robot_ok(&report));
    }

    output::emit_human(render(&report, ctx));
    Ok(())
}

fn render(report: &CalculationReport, ctx: &AppContext) -> HumanLayout {
    let mut layout = HumanLayout::for_format(ctx.output_format);
    layout.title(&format!("Packs for an order of {}", report.order));
    if report.packs.is_empty() {
        layout.push_line("No pack sizes available.");
        return layout;
    }

    for (size, count) in report.packs.iter().rev() {
        layout.bullet(&format!("{count} x {size}"));
    }
    layout
        .blank()
        .kv("Items shipped", &report.total_items.to_string())
        .kv("Packs shipped", &report.total_packs.to_string());
    if report.method == Method::Heuristic {
        layout.kv("Method", "heuristic (result may not be optimal)");
    }
    layout
}
