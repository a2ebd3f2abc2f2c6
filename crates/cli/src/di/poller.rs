use knockknock_application::use_cases::{PollQueryLogUseCase, ReportSightingsUseCase};
use knockknock_domain::PollerConfig;
use knockknock_infrastructure::http::{HttpSightingBackend, PiholeQueryLogSource};
use knockknock_jobs::SightingPollJob;
use std::sync::Arc;

pub struct Poller {
    pub poll: Arc<PollQueryLogUseCase>,
}

impl Poller {
    pub fn new(config: &PollerConfig) -> anyhow::Result<Self> {
        let source = PiholeQueryLogSource::new(
            &config.pihole_host,
            config.pihole_token.clone(),
            config.request_timeout(),
        )?;
        let backend = HttpSightingBackend::new(&config.backend_host, config.request_timeout())?;

        let reporter = Arc::new(
            ReportSightingsUseCase::new(Arc::new(backend))
                .with_concurrency(config.report_concurrency),
        );
        let poll = PollQueryLogUseCase::new(Arc::new(source), reporter)
            .with_window(config.window_secs);

        Ok(Self {
            poll: Arc::new(poll),
        })
    }

    pub fn into_job(self, config: &PollerConfig) -> SightingPollJob {
        SightingPollJob::new(self.poll, config.poll_interval())
    }
}
