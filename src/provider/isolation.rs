// Provider boundary.
// Errors and panics stop here and become a ProviderFault;
// nothing a provider does may abort the scoring pass.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::warn;

use super::provider::Provider;
use crate::entry::ResultEntry;
use crate::types::{FaultKind, ProviderFault, Query};

pub(crate) fn check_validity(provider: &dyn Provider, query: &Query) -> Result<bool, ProviderFault> {
    catch_unwind(AssertUnwindSafe(|| provider.is_valid(query))).map_err(|panic| {
        let message = panic_message(panic.as_ref());
        warn!(provider = provider.name(), %message, "validity check panicked");
        ProviderFault {
            provider: provider.name().to_string(),
            kind: FaultKind::ValidityPanicked,
        }
    })
}

pub(crate) fn generate_isolated(
    provider: &dyn Provider,
    query: &Query,
) -> Result<Vec<ResultEntry>, ProviderFault> {
    match catch_unwind(AssertUnwindSafe(|| provider.generate(query))) {
        Ok(Ok(entries)) => Ok(entries),
        Ok(Err(err)) => {
            warn!(provider = provider.name(), error = %err, "candidate generation failed");
            Err(ProviderFault {
                provider: provider.name().to_string(),
                kind: FaultKind::GenerationFailed(err.to_string()),
            })
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            warn!(provider = provider.name(), %message, "candidate generation panicked");
            Err(ProviderFault {
                provider: provider.name().to_string(),
                kind: FaultKind::GenerationPanicked(message),
            })
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
