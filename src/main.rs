//! nixrad-pack - CLI tool to compute packaging for radiator orders.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nixrad_core::{
    audit_rows, build_labels, pack_order_file, AuditContext, AuditRow, Catalog, Consignee,
    PackingList, ShippingLabel,
};

/// Compute packaged sizes, desi, weights and packing recipes for an order.
#[derive(Parser, Debug)]
#[command(name = "nixrad-pack")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Order lines as a JSON array of {"name", "quantity", "amount"}
    #[arg(short, long)]
    input: PathBuf,

    /// Catalog JSON overriding the built-in rule tables
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print shipping label text instead of JSON
    #[arg(long)]
    labels: bool,

    /// Print the production checklist instead of JSON
    #[arg(long)]
    checklist: bool,

    /// Include order-log rows in the JSON report
    #[arg(long, requires = "date")]
    audit: bool,

    /// Recipient name
    #[arg(long)]
    customer: Option<String>,

    /// Recipient address
    #[arg(long)]
    address: Option<String>,

    /// Recipient phone
    #[arg(long)]
    phone: Option<String>,

    /// Order date for log rows
    #[arg(long)]
    date: Option<String>,

    /// Source tag for log rows
    #[arg(long, default_value = "EXCEL")]
    source: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// JSON report written by default.
#[derive(Serialize)]
struct Report<'a> {
    packing_list: &'a PackingList,
    labels: Vec<ShippingLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audit: Option<Vec<AuditRow>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::default(),
    };

    info!("Processing: {}", args.input.display());

    let list = pack_order_file(&args.input, &catalog)
        .with_context(|| format!("Failed to read orders from {}", args.input.display()))?;

    if list.package_count == 0 {
        warn!("No packages produced");
    }

    let consignee = Consignee {
        name: args.customer.clone(),
        address: args.address.clone(),
        phone: args.phone.clone(),
    };
    let labels = build_labels(&list, &consignee);

    if args.labels {
        for label in &labels {
            println!("{}\n", label.render_text());
        }
        return Ok(());
    }

    if args.checklist {
        print!("{}", render_checklist(&list));
        return Ok(());
    }

    let audit = if args.audit {
        let context = AuditContext {
            date: args.date.clone().unwrap_or_default(),
            customer: args.customer.clone().unwrap_or_default(),
            source: args.source.clone(),
        };
        Some(audit_rows(&list, &context))
    } else {
        None
    };

    let report = Report {
        packing_list: &list,
        labels,
        audit,
    };
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Production checklist: one line per packed row, then the summed recipe.
fn render_checklist(list: &PackingList) -> String {
    let mut out = String::new();

    out.push_str("URUNLER\n");
    for item in &list.items {
        let r = &item.result;
        out.push_str(&format!(
            "{:>3} x {}  ({} cm, desi {}, {} kg)\n",
            r.quantity,
            r.short_label,
            r.dimension_string(),
            r.desi,
            r.physical_weight_kg
        ));
    }
    for accessory in &list.accessories {
        out.push_str(&format!("{:>3} x {}\n", accessory.quantity, accessory.name));
    }

    out.push_str("\nMALZEME\n");
    for line in &list.bill_of_materials.lines {
        out.push_str(&format!("{:>3} {} {}\n", line.quantity, line.unit, line.item));
    }

    out.push_str(&format!(
        "\nTOPLAM: {} koli, desi {}, {} kg\n",
        list.package_count,
        list.total_desi,
        list.total_weight_display()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nixrad_core::{build_packing_list, OrderLine};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_checklist() {
        let list = build_packing_list(
            &[
                OrderLine::new("NIRVANA 500/1270 BEYAZ", 3),
                OrderLine::new("TERMOSTATİK VANA", 2),
            ],
            &Catalog::default(),
        );

        let expected = "\
URUNLER
  3 x NIRVANA 500/1270 BEYAZ  (130.5 x 50.5 x 8 cm, desi 17.57, 16.83 kg)
  2 x TERMOSTATİK VANA

MALZEME
  6 Adet Kör Tapa
  3 Adet Hava Tahliye Tapası
  3 Takım Nirvana Ayak Seti
 12 Adet Dübel
 12 Adet Vida
  6 Metre Streç Film

TOPLAM: 3 koli, desi 52.71, 50.5 kg
";
        assert_eq!(render_checklist(&list), expected);
    }

    #[test]
    fn test_args_audit_requires_date() {
        let result = Args::try_parse_from(["nixrad-pack", "-i", "orders.json", "--audit"]);
        assert!(result.is_err());

        let args = Args::try_parse_from([
            "nixrad-pack",
            "-i",
            "orders.json",
            "--audit",
            "--date",
            "19.10.2026",
        ])
        .unwrap();
        assert!(args.audit);
        assert_eq!(args.source, "EXCEL");
    }
}
