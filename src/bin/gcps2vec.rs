/*
 * Copyright (c) 2023, United States Government, as represented by the
 * Administrator of the National Aeronautics and Space Administration.
 * All rights reserved.
 *
 * The RACE - Runtime for Airspace Concept Evaluation platform is licensed
 * under the Apache License, Version 2.0 (the "License"); you may not use
 * this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

/// gcps2vec - write the ground control points of a raster dataset as a vector point layer

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use structopt::StructOpt;
use gdal::Dataset;
use anyhow::Result;

use gcpvec::GcpVecBuilder;
use gcpvec::errors::GcpVecError;
use gcpvec::vector_output_drivers;

#[derive(StructOpt)]
struct CliOpts {
    /// output vector driver short name (default: inferred from tgt_filename extension, GML fallback)
    #[structopt(short="f",long)]
    tgt_format: Option<String>,

    /// write pixel/line point geometries with X/Y/Z ground coordinate attributes
    #[structopt(short,long)]
    pixel: bool,

    /// name of the created layer
    #[structopt(short,long,default_value="gcps")]
    layer: String,

    /// layer creation options (name=value)
    #[structopt(long)]
    lco: Vec<String>,

    /// set log level to info
    #[structopt(short,long)]
    verbose: bool,

    /// input raster filename (GCP source)
    src_filename: String,

    /// output vector filename
    tgt_filename: String,
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
}

fn main () -> Result<()> {
    let loglevel = if ARGS.verbose {"info"} else {"warn"};
    env_logger::init_from_env( env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, loglevel));

    let src_ds = Dataset::open( Path::new(ARGS.src_filename.as_str()))?;

    let mut builder = GcpVecBuilder::new( &src_ds, ARGS.tgt_filename.as_str())?;
    if let Some(ref fmt) = ARGS.tgt_format {
        builder.set_driver_name( fmt.as_str());
    }
    if ARGS.pixel {
        builder.set_pixel_out(true);
    }
    if !ARGS.lco.is_empty() {
        builder.set_layer_create_options( ARGS.lco.clone());
    }
    builder.set_layer_name( ARGS.layer.as_str());

    match builder.exec() {
        Ok(n) => {
            println!("{} GCPs written to {}", n, ARGS.tgt_filename);
            Ok(())
        }
        Err(e) => {
            if let GcpVecError::NoSuchDriver(ref name) = e {
                eprintln!("no vector output driver named {}, available drivers:", name);
                for driver_name in vector_output_drivers() {
                    eprintln!("    {}", driver_name);
                }
            }
            Err(e.into())
        }
    }
}
