//! URL generator.

use super::policy::{SoftFailure, SoftFailurePolicy};
use super::Generator;
use synth_core::ProducedValue;

/// Produces `http://{host}/{path}` URLs from a host and a path generator.
///
/// The host is produced before the path. A formatted string that does not
/// parse yields the zero URL (`ProducedValue::Url(None)`) and is reported
/// through the `url_parse` check.
#[derive(Debug, Clone)]
pub struct UrlOf<H, P> {
    host: H,
    path: P,
    policy: SoftFailurePolicy,
}

impl<H: Generator, P: Generator> UrlOf<H, P> {
    pub fn new(host: H, path: P) -> Self {
        Self {
            host,
            path,
            policy: SoftFailurePolicy::default(),
        }
    }

    /// Set the policy for unparsable URLs.
    pub fn with_policy(mut self, policy: SoftFailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<H: Generator, P: Generator> Generator for UrlOf<H, P> {
    fn produce(&mut self) -> ProducedValue {
        let host = self.host.produce();
        let path = self.path.produce();
        let formatted = format!("http://{host}/{path}");

        match ::url::Url::parse(&formatted) {
            Ok(url) => ProducedValue::Url(Some(url)),
            Err(e) => {
                self.policy
                    .report(SoftFailure::UrlParse, format_args!("{formatted:?}: {e}"));
                ProducedValue::Url(None)
            }
        }
    }
}
