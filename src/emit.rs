use crate::config::Config;
use crate::ir::{Extraction, Sentinel};

fn array_name(function: &str, config: &Config) -> String {
    format!("{}{}", function, config.array_suffix)
}

/// `int NAME_man_errors[] = {v1, v2, 12345};`
fn emit_array(function: &str, values: &[Sentinel], config: &Config) -> String {
    let mut items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    items.push(config.terminator.to_string());
    format!(
        "int {}[] = {{{}}};",
        array_name(function, config),
        items.join(", ")
    )
}

pub fn emit_c(extraction: &Extraction, config: &Config) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    out.push(format!("#include \"{}\"", config.header));

    for (function, values) in &extraction.table {
        out.push(emit_array(function, values, config));
    }

    out.push(String::new());
    out.push(format!(
        "struct {} {}[] = {{",
        config.struct_type, config.table_name
    ));
    for function in extraction.table.keys() {
        out.push(format!(
            "{{ \"{}\", {} }},",
            function,
            array_name(function, config)
        ));
    }
    out.push("};".to_string());

    out.push(format!(
        "/* void functions without return annotation: {} */",
        extraction.void_count
    ));
    out
}
