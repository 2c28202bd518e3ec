use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{error, info};

const MAX_RESTARTS: u32 = 5;
const RESTART_DELAY: Duration = Duration::from_secs(1);

#[derive(Error, Debug)]
#[error("{0}")]
pub struct Error(String);

impl Error {
    pub fn new(s: &str) -> Error {
        Error(s.to_string())
    }

    pub fn from<E: std::error::Error>(e: E) -> Self {
        Self(e.to_string())
    }
}

/// Long-running unit of work supervised by [`ServiceManager`].
#[async_trait]
pub trait Service {
    type Context: Clone + Send;
    const NAME: &'static str;
    async fn new(context: Self::Context) -> Self;
    async fn run(self) -> Result<(), Error>;
}

pub struct ServiceManager<C> {
    context: C,
    services: JoinSet<Result<(), Error>>,
}

impl<C> ServiceManager<C>
where
    C: 'static + Clone + Send,
{
    pub fn new(context: C) -> Self {
        Self {
            context,
            services: JoinSet::new(),
        }
    }

    // Restarts a failed service a few times before giving up on it
    pub fn spawn<T>(&mut self)
    where
        T: Service<Context = C> + Send + 'static,
    {
        let context = self.context.clone();
        self.services.spawn(async move {
            let mut restarts = 0;
            loop {
                let service = T::new(context.clone()).await;
                match service.run().await {
                    Ok(()) => {
                        info!(service = T::NAME, "Service stopped");
                        return Ok(());
                    }
                    Err(e) if restarts < MAX_RESTARTS => {
                        restarts += 1;
                        error!(service = T::NAME, restarts, "Service failed, restarting: {}", e);
                        tokio::time::sleep(RESTART_DELAY).await;
                    }
                    Err(e) => {
                        error!(service = T::NAME, "Service failed permanently: {}", e);
                        return Err(e);
                    }
                }
            }
        });
    }

    /// Waits for every service; the first failure is returned.
    pub async fn wait(&mut self) -> Result<(), Error> {
        while let Some(joined) = self.services.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => return Err(e),
                Err(e) => return Err(Error::from(e)),
            }
        }
        Ok(())
    }
}
