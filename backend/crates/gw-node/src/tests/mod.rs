
use crate::Release;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Release that counts how often it fired
pub(crate) fn counting_release() -> (Release, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let release = {
        let count = Arc::clone(&count);
        Release::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    };
    (release, count)
}
