// metadata.rs - Document information dictionary for merged output

use chrono::{DateTime, Utc};
use lopdf::{dictionary, Dictionary, Object};

/// Format a timestamp as a PDF date string (`D:YYYYMMDDHHmmSS+00'00'`)
pub fn pdf_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("D:%Y%m%d%H%M%S+00'00'").to_string()
}

/// Info dictionary naming the producer and stamping creation/modification dates
pub fn info_dictionary(producer: &str, timestamp: DateTime<Utc>) -> Dictionary {
    let date = pdf_date(timestamp);
    dictionary! {
        "Producer" => Object::string_literal(producer),
        "CreationDate" => Object::string_literal(date.clone()),
        "ModDate" => Object::string_literal(date),
    }
}
