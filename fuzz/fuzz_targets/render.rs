#![no_main]
use adls_uri::AbfsUri;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(u) = AbfsUri::parse(data) else {
        return;
    };

    let client = u.to_client_uri();
    let rest = u.to_rest_url().expect("rendered URL should be valid");

    let from_client = AbfsUri::parse(client.as_str()).unwrap();
    let from_rest = AbfsUri::parse(rest.as_str()).unwrap();
    assert_eq!(from_rest, u);
    assert_eq!(from_rest.to_rest_url().unwrap(), rest);

    // The client form re-splits an account name containing `@`.
    if u.account_name().contains('@') {
        assert_eq!(from_client.to_client_uri(), client);
        return;
    }
    assert_eq!(from_client, u);
    assert_eq!(from_client.to_client_uri(), client);
});
