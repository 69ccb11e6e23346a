//Make sure to mod this as first item in lib.rs

/// Small macro that builds a header record from
/// kind => value pairs, mostly used by tests
macro_rules! headers {
    ( $( $kind:ident => $value:expr ),* ) => {
        {
            let mut temp_record = crate::message::headers::MessageHeaders::new();
            $(
                temp_record.set(crate::message::headers::HeaderKind::$kind, $value.to_string());
            )*
            temp_record
        }
    };
}

macro_rules! report {
    ( $( $record:expr ),* ) => {  // Match zero or more comma delimited records
        {
            let mut temp_records = Vec::new();  // Create the backing record list
            $(
                temp_records.push($record); // Insert each record in call order
            )*
            crate::message::headers::MessageReport::new(temp_records) // Return the populated report
        }
    };
}
