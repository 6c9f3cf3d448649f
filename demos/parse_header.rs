use auth_header::{parse, parse_basic, parse_values};
use tracing::{error, info, instrument};

#[instrument]
fn show(header: &str) {
    let auth = match parse(header) {
        Ok(auth) => auth,
        Err(e) => {
            error!(err = %e, "failed to parse header");
            return;
        }
    };

    if auth.is_scheme("Basic") {
        match parse_basic(auth.raw_value()) {
            Ok(creds) if creds.is_empty() => info!("no basic credentials"),
            Ok(creds) => info!(username = %creds.username, "basic credentials"),
            Err(e) => error!(err = %e, "bad basic payload"),
        }
        return;
    }

    match parse_values(auth.raw_value()) {
        Ok(params) => {
            for (name, value) in params.iter() {
                info!(scheme = auth.scheme(), name, value, "param");
            }
        }
        Err(e) => error!(scheme = auth.scheme(), err = %e, "bad auth params"),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1).peekable();
    if args.peek().is_none() {
        show("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
        show(r#"Digest username="Mufasa", realm="testrealm@host.com", qop=auth, nc=00000001"#);
        return;
    }
    for header in args {
        show(&header);
    }
}
