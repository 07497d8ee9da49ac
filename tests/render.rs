use adls_uri::AbfsUri;

const CASES: &[(&str, &str, &str)] = &[
    ("container", "storageacct", "/dir/file.csv"),
    ("fs", "acct", ""),
    ("fs", "acct", "/"),
    ("fs", "acct", "/a/b/"),
    ("a@b", "acct", "/x@y:z"),
    ("logs", "acct", "/2024/01/my%20file;v=1"),
    ("résumé", "账户", "/-._~!$'()*+,;=%"),
];

#[test]
fn render_example() {
    let u = AbfsUri::parse("abfss://container@storageacct.dfs.core.windows.net/dir/file.csv").unwrap();
    assert_eq!(
        u.to_rest_url().unwrap(),
        "https://storageacct.dfs.core.windows.net/container/dir/file.csv"
    );
    assert_eq!(
        u.to_client_uri(),
        "abfs://container@storageacct.dfs.core.windows.net/dir/file.csv"
    );

    let u = AbfsUri::parse("HTTP://storageacct.DFS.CORE.WINDOWS.NET/container").unwrap();
    assert_eq!(
        u.to_rest_url().unwrap(),
        "https://storageacct.dfs.core.windows.net/container"
    );
    assert_eq!(
        u.to_client_uri(),
        "abfs://container@storageacct.dfs.core.windows.net"
    );
}

#[test]
fn round_trip() {
    for &(fs, acct, path) in CASES {
        let client = format!("abfs://{fs}@{acct}.dfs.core.windows.net{path}");
        let rest = format!("https://{acct}.dfs.core.windows.net/{fs}{path}");

        let from_client = AbfsUri::parse(client.as_str()).unwrap();
        let from_rest = AbfsUri::parse(rest.as_str()).unwrap();

        assert_eq!(from_client.file_system(), fs);
        assert_eq!(from_client.account_name(), acct);
        assert_eq!(from_client.path(), path);
        assert_eq!(from_rest.file_system(), fs);
        assert_eq!(from_rest.account_name(), acct);
        assert_eq!(from_rest.path(), path);

        assert_eq!(from_client.to_client_uri(), client);
        assert_eq!(from_client.to_rest_url().unwrap(), rest);
        assert_eq!(from_rest.to_client_uri(), client);
        assert_eq!(from_rest.to_rest_url().unwrap(), rest);

        let rendered = from_client.to_client_uri();
        assert_eq!(AbfsUri::parse(rendered.as_str()).unwrap(), from_client);
        let rendered = from_client.to_rest_url().unwrap();
        assert_eq!(AbfsUri::parse(rendered.as_str()).unwrap(), from_client);
    }
}

#[test]
fn secure_client_renders_plain_abfs() {
    let u = AbfsUri::parse("abfss://fs@acct.dfs.core.windows.net/a").unwrap();
    assert_eq!(u.to_client_uri(), "abfs://fs@acct.dfs.core.windows.net/a");
    let u = AbfsUri::parse("http://acct.dfs.core.windows.net/fs/a").unwrap();
    assert_eq!(u.to_rest_url().unwrap(), "https://acct.dfs.core.windows.net/fs/a");
}

#[test]
fn client_form_resplits_account_with_at() {
    let u = AbfsUri::parse("https://x@y.dfs.core.windows.net/fs/a").unwrap();
    assert_eq!(u.account_name(), "x@y");
    assert_eq!(u.file_system(), "fs");

    let client = u.to_client_uri();
    assert_eq!(client, "abfs://fs@x@y.dfs.core.windows.net/a");
    let reparsed = AbfsUri::parse(client.as_str()).unwrap();
    assert_eq!(reparsed.file_system(), "fs@x");
    assert_eq!(reparsed.account_name(), "y");
    assert_eq!(reparsed.path(), "/a");
    assert_ne!(reparsed, u);

    // The REST form keeps the names apart.
    let rest = u.to_rest_url().unwrap();
    assert_eq!(rest, "https://x@y.dfs.core.windows.net/fs/a");
    assert_eq!(AbfsUri::parse(rest.as_str()).unwrap(), u);

    // An `@` in the file system alone is unambiguous.
    let u = AbfsUri::parse("https://acct.dfs.core.windows.net/a@b/c").unwrap();
    assert_eq!(AbfsUri::parse(u.to_client_uri().as_str()).unwrap(), u);
}

#[test]
fn directory_param() {
    let base = "abfs://fs@acct.dfs.core.windows.net";
    for (path, param) in [
        ("", "/"),
        ("/", "/"),
        ("/a", "a"),
        ("/a/b", "a/b"),
        ("/a/b/", "a/b/"),
    ] {
        let u = AbfsUri::parse(format!("{base}{path}")).unwrap();
        assert_eq!(u.directory_param(), param, "{path:?}");
        assert_eq!(u.path().directory_param(), param);
    }
}

#[test]
fn decode_path() {
    let u = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/my%20dir/r%C3%A9sum%C3%A9.txt").unwrap();
    assert_eq!(u.path().decode().to_string_lossy(), "/my dir/résumé.txt");
    assert_eq!(u.path().decode().to_string().unwrap(), "/my dir/résumé.txt");

    let u = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/100%/%zz").unwrap();
    assert_eq!(u.path().decode().to_string_lossy(), "/100%/%zz");

    let u = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/%FF").unwrap();
    assert_eq!(u.path().decode().to_bytes(), &b"/\xff"[..]);
    assert!(u.path().decode().to_string().is_err());
    assert_eq!(u.path().decode().to_string_lossy(), "/\u{fffd}");

    // Comparison is made on the encoded path.
    let a = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/a%20b").unwrap();
    let b = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/a%2520b").unwrap();
    assert_ne!(a, b);
}
