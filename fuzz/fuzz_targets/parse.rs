#![no_main]
use adls_uri::{is_adls_uri, AbfsUri, Scheme};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(u) = AbfsUri::parse(data) else {
        assert!(!is_adls_uri(Some(data)));
        return;
    };
    assert!(is_adls_uri(Some(data)));
    assert!(!u.file_system().is_empty());
    assert!(!u.account_name().is_empty());

    let path = u.path().as_str();
    assert!(path.is_empty() || path.starts_with('/'));

    let mut buf = String::with_capacity(data.len());
    match u.scheme() {
        Scheme::Abfs | Scheme::Abfss => {
            buf.push_str(u.file_system());
            buf.push('@');
            buf.push_str(u.account_name());
        }
        Scheme::Http | Scheme::Https => {
            buf.push_str(u.account_name());
        }
    }
    let start = u.scheme().as_str().len() + "://".len();
    assert!(data[start..].starts_with(&buf));
    assert!(data.ends_with(path));
});
