//! `sync` command: vendor feed → per-category product files.
//!
//! Configuration and mapping problems are fatal before any network or file
//! activity. After that, page failures truncate the fetch and a failed
//! category write only loses that category's file.

mod fetch;
mod output;
mod pipeline;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use gunworks_core::{AppConfig, Category, CategoryMapping, ParseCategoryError};

use self::fetch::{fetch_feed, FeedRecords};
use self::output::{write_category_file, CategoryFile};
use self::pipeline::{Pipeline, PipelineOutput, SkipCounts};

/// Which category files a run rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Selection {
    #[default]
    All,
    One(Category),
}

impl Selection {
    pub(crate) fn categories(self) -> Vec<Category> {
        match self {
            Selection::All => Category::ALL.to_vec(),
            Selection::One(category) => vec![category],
        }
    }
}

impl FromStr for Selection {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::One)
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::One(category) => write!(f, "{category}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryOutcome {
    pub category: Category,
    pub products: usize,
    pub written: bool,
}

#[derive(Debug, Default)]
pub(crate) struct SyncSummary {
    pub records_read: usize,
    pub record_errors: usize,
    pub page_errors: usize,
    pub pages_fetched: usize,
    pub hit_page_limit: bool,
    pub classified: usize,
    pub skipped: SkipCounts,
    pub categories: Vec<CategoryOutcome>,
}

impl SyncSummary {
    pub(crate) fn failed_writes(&self) -> usize {
        self.categories.iter().filter(|c| !c.written).count()
    }

    pub(crate) fn print(&self) {
        println!(
            "sync complete: {} records read, {} classified, {} skipped",
            self.records_read,
            self.classified,
            self.skipped.total()
        );
        println!(
            "  skipped: restricted={} out_of_stock={} missing_name={} unpriced={}",
            self.skipped.restricted,
            self.skipped.out_of_stock,
            self.skipped.missing_name,
            self.skipped.unpriced
        );
        println!(
            "  errors: record_errors={} page_errors={} failed_writes={}",
            self.record_errors,
            self.page_errors,
            self.failed_writes()
        );
        if self.pages_fetched > 0 {
            println!(
                "  api pages: fetched={}{}",
                self.pages_fetched,
                if self.hit_page_limit {
                    " (stopped at page limit; feed may be incomplete)"
                } else {
                    ""
                }
            );
        }
        for outcome in &self.categories {
            if outcome.written {
                println!("  {}: {} products written", outcome.category, outcome.products);
            } else {
                println!("  {}: write FAILED ({} products)", outcome.category, outcome.products);
            }
        }
    }
}

fn run_pipeline(records: &FeedRecords, pipeline: &Pipeline<'_>) -> PipelineOutput {
    match records {
        FeedRecords::Api(items) => pipeline.run(items.iter()),
        FeedRecords::Csv(rows) => pipeline.run(rows.iter()),
    }
}

/// Write the selected categories. A failed write is logged and reported in
/// the outcome; the remaining categories are still written.
pub(crate) fn write_outputs(
    output_dir: &Path,
    output: &PipelineOutput,
    selection: Selection,
    now: DateTime<Utc>,
) -> Vec<CategoryOutcome> {
    selection
        .categories()
        .into_iter()
        .map(|category| {
            let products = output
                .categories
                .get(&category)
                .map_or(&[][..], Vec::as_slice);
            let file = CategoryFile::new(category, products, now);
            let written = match write_category_file(output_dir, &file) {
                Ok(path) => {
                    tracing::info!(
                        category = category.as_str(),
                        products = products.len(),
                        path = %path.display(),
                        "wrote category file"
                    );
                    true
                }
                Err(e) => {
                    tracing::error!(
                        category = category.as_str(),
                        error = %format!("{e:#}"),
                        "failed to write category file"
                    );
                    false
                }
            };
            CategoryOutcome {
                category,
                products: products.len(),
                written,
            }
        })
        .collect()
}

/// Fetch, classify, and write one sync run.
///
/// The whole feed is always classified so a single-category run assigns
/// records exactly as a full run would; only the selected files are written.
///
/// # Errors
///
/// Returns an error when the feed cannot be read or yields no records. In
/// the latter case no file is touched.
pub(crate) async fn run_sync(
    config: &AppConfig,
    mapping: &CategoryMapping,
    selection: Selection,
) -> anyhow::Result<SyncSummary> {
    tracing::info!(source = %config.feed_source, %selection, "starting sync");

    let feed = fetch_feed(config).await?;
    if feed.records.is_empty() {
        anyhow::bail!(
            "vendor feed returned no records (page_errors={}, record_errors={}); existing files left untouched",
            feed.page_errors,
            feed.record_errors
        );
    }

    let pipeline = Pipeline::new(mapping, config.image_size);
    let output = run_pipeline(&feed.records, &pipeline);
    let categories = write_outputs(&config.output_dir, &output, selection, Utc::now());

    Ok(SyncSummary {
        records_read: feed.records.len(),
        record_errors: feed.record_errors,
        page_errors: feed.page_errors,
        pages_fetched: feed.pages_fetched,
        hit_page_limit: feed.hit_page_limit,
        classified: output.classified(),
        skipped: output.skipped,
        categories,
    })
}
