use chrono::Local;
use hyper::Request;

use crate::server::response;
use crate::server::response::ServerResult;

const GREETING_PREFIX: &str = "method doGet invoked ";

pub fn get<T>(_req: Request<T>) -> ServerResult {
    let body = format!("{}{}", GREETING_PREFIX, Local::now().to_rfc2822());
    Ok(response::send_plain(body))
}
