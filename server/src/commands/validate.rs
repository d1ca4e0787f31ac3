use contact::FormState;
use miette::Result;

use crate::state::{prefill_target_from_env, AppConfig};

pub(crate) fn validate() -> Result<()> {
    let config = AppConfig::from_env()?;
    println!("Base URL: {}", config.base_url);

    let target = prefill_target_from_env()?;
    println!("Google Form: {}", target.form_id());

    let sample = FormState {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: "+911234567890".into(),
        company: "Acme & Sons".into(),
        message: "Hello there = hi".into(),
    };
    let url = target.prefill_url(&sample);

    println!("Validating prefill link...");
    let pairs: Vec<_> = url.query_pairs().skip(1).collect();
    if pairs.len() != 5 {
        return Err(miette::miette!(
            "Expected 5 prefilled entries but found {} in {url}",
            pairs.len()
        ));
    }
    for (field, (key, value)) in contact::FormField::ALL.into_iter().zip(pairs) {
        let expected_key = format!("entry.{}", target.entries().get(field));
        if key != expected_key || value != sample.get(field) {
            return Err(miette::miette!(
                "Prefill entry for {field} is `{key}={value}`, expected `{expected_key}={}`",
                sample.get(field)
            ));
        }
    }

    println!("Prefill link Valid! ✅");

    Ok(())
}
