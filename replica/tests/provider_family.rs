//! Integration tests for the shared-instance providers.
//!
//! ConstantProvider and SingletonProvider hand out one instance; these tests check that the
//! identity is stable, including when many tasks race on the first request.


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use replica::{
    CloningProvider, ConstantProvider, ObjectProvider, ProviderError, SingletonProvider,
};

/// Inner provider that counts how often it is asked.
struct Counted {
    calls: Arc<AtomicUsize>,
}

impl ObjectProvider<Vec<u64>> for Counted {
    fn get_object(&self) -> Result<Vec<u64>, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) as u64;
        std::thread::sleep(std::time::Duration::from_millis(5));
        Ok(vec![n])
    }
}

/// **Scenario**: many tasks race on the first request of a singleton.
/// The inner provider runs once and every task sees the same instance.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn singleton_initializes_once_under_contention() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = Arc::new(SingletonProvider::<Vec<u64>, _>::new(Counted {
        calls: Arc::clone(&calls),
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = Arc::clone(&provider);
            tokio::spawn(async move { provider.get_object() })
        })
        .collect();

    let mut instances = Vec::new();
    for handle in handles {
        instances.push(handle.await.unwrap().unwrap());
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
    assert_eq!(*instances[0], vec![0]);
}

/// **Scenario**: a constant and a singleton-over-cloning provider are used interchangeably.
#[test]
fn shared_instance_providers_behind_one_interface() {
    let providers: Vec<Box<dyn ObjectProvider<Arc<String>>>> = vec![
        Box::new(ConstantProvider::new("constant".to_string())),
        Box::new(SingletonProvider::<String, _>::new(CloningProvider::from_clone(
            "singleton".to_string(),
        ))),
    ];

    for provider in &providers {
        let a = provider.get_object().unwrap();
        let b = provider.get_object().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
    assert_eq!(*providers[0].get_object().unwrap(), "constant");
    assert_eq!(*providers[1].get_object().unwrap(), "singleton");
}
