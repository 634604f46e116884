// Builders for xena queries. The xena server evaluates scheme-like
// expressions, so even a plain arithmetic string such as "(+ 1 2)" is a
// valid query. The builders here only do textual substitution into a fixed
// template; they never validate or parse the query language.

/// The field holding the patient identifier for a sample.
pub const PATIENT_FIELD: &str = "_PATIENT";

/// The field holding the sample identifier within a dataset.
pub const SAMPLE_ID_FIELD: &str = "sampleID";

/// Wrap a string in double quotes.
///
/// The input must not contain unescaped double-quote characters. No escaping
/// is performed, so a quote in the input corrupts the produced query and the
/// failure only shows up when the server tries to evaluate it.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Format a list of strings as a quoted array literal, e.g. `["a", "b"]`.
/// Element order is preserved; an empty list yields `[]`.
pub fn array_fmt<S: AsRef<str>>(values: &[S]) -> String {
    let quoted: Vec<String> = values.iter().map(|s| quote(s.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

/// Return a xena query which looks up sample ids for the given field=values.
///
/// The query resolves the field within the cohort, finds the accompanying
/// sample id field in the same dataset, then unpacks and filters the
/// per-record values server side. All of that happens remotely; locally this
/// is only string substitution, with the same no-embedded-quotes
/// precondition as [`quote`].
pub fn find_sample_by_field_query<S: AsRef<str>>(
    cohort: &str,
    field: &str,
    values: &[S],
) -> String {
    format!(
        r#"
(let [cohort {cohort}
      field_id-dataset (car (query {{:select [[:field.id :field_id] [:dataset.id :dataset]]
                                    :from [:dataset]
                                    :left-join [:field [:= :dataset_id :dataset.id]]
                                    :where [:and [:= :cohort cohort]
                                                 [:= :field.name {field}]]}}))
      field_id (:FIELD_ID field_id-dataset)
      dataset (:DATASET field_id-dataset)
      sample (:ID (car (query {{:select [:field.id]
                               :from [:field]
                               :where [:and [:= :dataset_id dataset]
                                            [:= :field.name {sample_field}]]}})))
      N (- (/ (:N (car (query {{:select [[#sql/call [:sum #sql/call [:length :scores]] :N]]
                               :from [:field_score]
                               :join [:scores [:= :scores_id :scores.id]]
                               :where [:= :field_id field_id]}}))) 4) 1)]
  {{cohort (map :SAMPLE (query {{:select [:sample]
                               :from [{{:select [[#sql/call [:unpackValue field_id, :x] :field_value]
                                                [#sql/call [:unpackValue sample, :x]  :sample]]
                                       :from [#sql/call [:system_range 0 N]]}}]
                               :where [:in :field_value {values}]}}))}})
"#,
        cohort = quote(cohort),
        field = quote(field),
        sample_field = quote(SAMPLE_ID_FIELD),
        values = array_fmt(values),
    )
}

/// Return a xena query which looks up sample ids for the given patients.
pub fn patient_to_sample_query<S: AsRef<str>>(cohort: &str, patients: &[S]) -> String {
    find_sample_by_field_query(cohort, PATIENT_FIELD, patients)
}
