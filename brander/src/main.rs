use brander::{query::QueryParams, BrandBook};
use std::env;

const USAGE: &str = "\
brander - look up a brand record by (partial, case-insensitive) name

USAGE:
    brander [<query-string>]

EXAMPLES:
    brander 'brand=Choice'
    QUERY_STRING='brand=engage' brander

The raw query string is taken from the first argument, or from the
QUERY_STRING environment variable when no argument is given. The body
printed is the first matching record as JSON, or `null` when the `brand`
parameter is absent or nothing matches.
";

fn main() {
    let raw = env::args().nth(1);

    if matches!(raw.as_deref(), Some("-h") | Some("--help")) {
        print!("{}", USAGE);
        return;
    }

    let raw = raw.or_else(|| env::var("QUERY_STRING").ok());

    let params = raw.as_deref().map(QueryParams::parse);
    let query = params.as_ref().and_then(|params| params.first("brand"));

    // exactly one output per invocation, no trailing newline: the body is
    // either one JSON object or the literal `null`
    print!("{}", BrandBook::builtin().respond(query));
}
