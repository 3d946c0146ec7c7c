use lazy_static::lazy_static;
use structopt::StructOpt;
use std::path::Path;
use gdal::Dataset;
use anyhow::Result;
use gcpvec::gcp::{gcp_projection, get_gcps};

/// showgcps - print the ground control points of a raster dataset

#[derive(StructOpt)]
struct CliOpts {
    /// print the GCP projection as WKT instead of proj4
    #[structopt(short,long)]
    wkt: bool,

    /// input raster filename
    src_filename: String,
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
}

fn main () -> Result<()> {
    let src_ds = Dataset::open( Path::new(ARGS.src_filename.as_str()))?;

    let gcps = get_gcps(&src_ds);
    println!("{} GCPs in {}", gcps.len(), ARGS.src_filename);

    if ARGS.wkt {
        if let Some(wkt) = gcp_projection(&src_ds) {
            println!("projection: {}", wkt);
        }
    } else if let Some(srs) = src_ds.gcp_spatial_ref() {
        println!("projection: '{}'", srs.to_proj4()?);
    }

    for gcp in &gcps {
        println!("{:>8}: pixel/line ({:10.2},{:10.2}) -> ({:14.6},{:14.6},{:10.2}) {}",
                 gcp.id, gcp.pixel, gcp.line, gcp.x, gcp.y, gcp.z, gcp.info);
    }

    Ok(())
}
