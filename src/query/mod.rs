mod query_builder;
#[cfg(test)]
mod test_query_builder;

pub use query_builder::{
    array_fmt, find_sample_by_field_query, patient_to_sample_query, quote, PATIENT_FIELD,
    SAMPLE_ID_FIELD,
};
