use crate::charts::Chart;
use crate::dashboard::page::Page;
use crate::dashboard::Dashboard;
use crate::frames::error::FrameError;
use crate::frames::temperature_frame::{average_temperature_per_year, load_historical};
use log::warn;

impl Dashboard {
    pub(crate) async fn render_historical(&self, page: &mut Page) {
        page.subheader("📊 Average Temperature per Year");

        match self.historical_chart().await {
            Ok(chart) => page.chart(chart),
            Err(e) => {
                warn!("Historical temperature view failed: {:?}", e);
                page.error(format!("Could not load historical temperatures: {}", e));
            }
        }
    }

    async fn historical_chart(&self) -> Result<Chart, FrameError> {
        let frame = load_historical(&self.config.historical_csv).await?;
        let averages = average_temperature_per_year(&frame)?;
        Ok(Chart::historical_temperature(averages))
    }
}
