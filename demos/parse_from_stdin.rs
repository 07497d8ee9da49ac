use std::io;

use adls_uri::AbfsUri;

fn main() {
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = io::stdin()
            .read_line(&mut buf)
            .expect("failed to read line");
        if n == 0 {
            break;
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }

        match AbfsUri::parse(buf.as_str()) {
            Ok(u) => {
                println!("{u:#?}");
                println!("client: {}", u.to_client_uri());
                match u.to_rest_url() {
                    Ok(url) => println!("rest:   {url}"),
                    Err(e) => println!("rest:   error: {e}"),
                }
                println!("dir:    {}", u.directory_param());
            }
            Err(e) => println!("Error: {e}"),
        };
    }
}
