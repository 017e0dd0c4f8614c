//! Dataset summary command

use colored::Colorize;

use crate::dataset::Dataset;
use crate::interfaces::cli::CliError;

/// Load the dataset and print record count, payload bounds and per-site tallies
pub fn inspect_dataset(path: &str, dropdown_sites: &[String]) -> Result<(), CliError> {
    let dataset = Dataset::load(path)?;
    print!("{}", render_summary(path, &dataset, dropdown_sites));
    Ok(())
}

/// Plain-text summary, kept separate from printing for testing
pub fn render_summary(path: &str, dataset: &Dataset, dropdown_sites: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Dataset:".bold(), path));
    out.push_str(&format!("  records: {}\n", dataset.len()));

    match dataset.payload_bounds() {
        Some(bounds) => out.push_str(&format!(
            "  payload range: {} - {} kg\n",
            bounds.min, bounds.max
        )),
        None => out.push_str("  payload range: n/a (empty dataset)\n"),
    }

    let total_successes: usize = dataset.iter().filter(|r| r.is_success()).count();
    out.push_str(&format!(
        "  outcomes: {} success / {} failure\n",
        total_successes,
        dataset.len() - total_successes
    ));

    out.push_str(&format!("{}\n", "Sites:".bold()));
    for (site, summary) in dataset.site_summaries() {
        let marker = if dropdown_sites.iter().any(|s| s == site) {
            ""
        } else {
            " (not in dropdown)"
        };
        out.push_str(&format!(
            "  {:<14} {:>3} launches, {:>3} successes{}\n",
            site, summary.launches, summary.successes, marker
        ));
    }
    out
}
