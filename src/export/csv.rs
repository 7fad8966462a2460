use crate::error::ExportError;
use crate::pricing::PricedBom;
use std::fs::File;
use std::path::Path;

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}

/// Writes one row per priced line, products first. Locations are joined with "; ".
pub fn export_csv<P: AsRef<Path>>(bom: &PricedBom, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Kind",
        "Id",
        "Name",
        "Brand",
        "Category",
        "Quantity",
        "Unit Price",
        "Margin %",
        "Sell Price",
        "Line Total",
        "Locations",
    ])?;

    for line in bom.lines() {
        let record = &line.record;
        writer.write_record([
            line.kind.label(),
            record.id.as_str(),
            record.name.as_str(),
            record.brand.as_deref().unwrap_or(""),
            record.category.as_deref().unwrap_or(""),
            record.quantity.to_string().as_str(),
            money(line.unit_price).as_str(),
            line.margin_percent
                .map(|m| format!("{m}"))
                .unwrap_or_default()
                .as_str(),
            money(line.sell_price).as_str(),
            money(line.line_total).as_str(),
            record.locations.join("; ").as_str(),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
