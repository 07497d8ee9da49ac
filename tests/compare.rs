use adls_uri::{AbfsUri, Scheme};
use std::collections::{BTreeSet, HashMap};

#[test]
fn cross_form_equivalence() {
    let client = AbfsUri::parse("abfss://fs@acct.dfs.core.windows.net/dir/file").unwrap();
    let rest = AbfsUri::parse("https://acct.dfs.core.windows.net/fs/dir/file").unwrap();
    assert_ne!(client.as_str(), rest.as_str());
    assert_ne!(client.scheme(), rest.scheme());
    assert_eq!(client, rest);

    let plain = AbfsUri::parse("ABFS://fs@acct.dfs.core.windows.net/dir/file").unwrap();
    assert_eq!(plain.scheme(), Scheme::Abfs);
    assert_eq!(client, plain);
}

#[test]
fn trailing_slash_matters() {
    let a = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/dir").unwrap();
    let b = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/dir/").unwrap();
    assert_ne!(a, b);

    let a = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net").unwrap();
    let b = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/").unwrap();
    assert_ne!(a, b);
}

#[test]
fn map_key() {
    let mut map = HashMap::new();
    map.insert(
        AbfsUri::parse("abfss://fs@acct.dfs.core.windows.net/a".to_owned()).unwrap(),
        1,
    );
    let key: AbfsUri<String> = "https://acct.dfs.core.windows.net/fs/a".parse().unwrap();
    assert_eq!(map.get(&key), Some(&1));

    map.insert(key, 2);
    assert_eq!(map.len(), 1);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [2]);
}

#[test]
fn mixed_storage() {
    let s = "abfs://fs@acct.dfs.core.windows.net/a";
    let borrowed = AbfsUri::parse(s).unwrap();
    let owned = AbfsUri::parse(s.to_owned()).unwrap();
    assert!(borrowed == owned);
    assert!(owned == borrowed);
    assert_eq!(owned.borrow(), borrowed);
    assert_eq!(AbfsUri::<String>::from(borrowed), owned);
}

#[test]
fn ordering() {
    let set: BTreeSet<_> = [
        "abfs://b@acct.dfs.core.windows.net/",
        "https://acct.dfs.core.windows.net/a/z",
        "abfs://a@acct.dfs.core.windows.net/y",
        "abfs://a@zz.dfs.core.windows.net",
        "http://acct.dfs.core.windows.net/a/y",
    ]
    .into_iter()
    .map(|s| AbfsUri::parse(s).unwrap())
    .collect();

    let sorted: Vec<_> = set.iter().map(|u| u.to_client_uri()).collect();
    assert_eq!(
        sorted,
        [
            "abfs://a@acct.dfs.core.windows.net/y",
            "abfs://a@acct.dfs.core.windows.net/z",
            "abfs://a@zz.dfs.core.windows.net",
            "abfs://b@acct.dfs.core.windows.net/",
        ]
    );
}
