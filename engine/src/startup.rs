use demand_core::{CoreResult, DemandQuery, DemandReportSink, PortDemand, port_demand};
use postgres::PostgresAdapter;
use tracing::{Level, event};

use crate::{report::CsvReportSink, settings::Settings};

pub struct App {
    settings: Settings,
    adapter: PostgresAdapter,
    sink: CsvReportSink,
}

impl App {
    pub async fn build(settings: Settings) -> App {
        let adapter = PostgresAdapter::new(&settings.postgres).await.unwrap();
        let sink = CsvReportSink::new(settings.output.directory.clone());

        App {
            settings,
            adapter,
            sink,
        }
    }

    /// Runs one analysis per configured interval and hands each series to
    /// the report sink.
    pub async fn run(self) -> CoreResult<()> {
        let analysis = &self.settings.analysis;

        for interval in &analysis.intervals {
            let query = DemandQuery {
                port_name: analysis.port_name.clone(),
                box_width: analysis.box_width,
                box_height: analysis.box_height,
                ship_types: analysis.ship_types.clone(),
                interval: *interval,
            };

            let Some(PortDemand { port, series }) = port_demand(&self.adapter, &query).await?
            else {
                event!(
                    Level::WARN,
                    "no port named '{}' in the reference dataset, skipping the analysis",
                    analysis.port_name,
                );
                return Ok(());
            };

            if series.is_empty() {
                event!(
                    Level::INFO,
                    "'{}' exists but no vessels matched the {} analysis",
                    port.name,
                    interval,
                );
            }

            let series = if analysis.fill_gaps {
                series.fill_gaps()
            } else {
                series
            };

            self.sink.persist(&port, &series).await?;
        }

        Ok(())
    }
}
