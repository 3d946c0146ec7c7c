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

use std::fs;
use std::path::{Path, PathBuf};

use gdal::{Dataset, DriverManager, Metadata};
use gdal::spatial_ref::SpatialRef;
use gdal::vector::{Defn, Feature, Geometry, Layer, LayerAccess, LayerOptions};
use gdal_sys::{OGRFieldType, OGRwkbGeometryType};
use log::debug;

use crate::{get_vector_driver_name_from_filename, initialize_gdal, DriverExt};
use crate::errors::{GcpVecError, Result};
use crate::gcp::{get_gcps, Gcp};

/// last resort output format if none was set and the target filename extension is unknown
const FALLBACK_DRIVER_NAME: &str = "GML";

const DEFAULT_LAYER_NAME: &str = "gcps";

/// builder to turn the GCP list of a raster dataset into a vector point layer,
/// one feature per GCP
///
/// default mode writes (x,y,z) ground point geometries with `Pixel`/`Line` attributes,
/// pixel mode writes (pixel,line) point geometries with `X`/`Y`/`Z` attributes.
/// `Id` and `Info` attributes are written in both modes
pub struct GcpVecBuilder <'a> {
    src_ds: &'a Dataset,
    tgt_path: PathBuf,

    driver_name: Option<String>,
    layer_name: String,
    layer_create_options: Vec<String>,
    pixel_out: bool,
}

impl <'a> GcpVecBuilder<'a> {
    pub fn new <P: AsRef<Path>> (src_ds: &'a Dataset, tgt: P) -> Result<GcpVecBuilder<'a>> {
        let path = tgt.as_ref();
        if path.to_str().is_none() {
            return Err( GcpVecError::InvalidFileName( path.display().to_string()))
        }

        Ok( GcpVecBuilder {
            src_ds,
            tgt_path: path.to_path_buf(),
            driver_name: None,
            layer_name: DEFAULT_LAYER_NAME.to_string(),
            layer_create_options: Vec::new(),
            pixel_out: false,
        })
    }

    pub fn set_driver_name (&mut self, name: &str) -> &mut GcpVecBuilder<'a> {
        self.driver_name = Some(name.to_string());
        self
    }

    pub fn set_layer_name (&mut self, name: &str) -> &mut GcpVecBuilder<'a> {
        self.layer_name = name.to_string();
        self
    }

    pub fn set_layer_create_options (&mut self, opts: Vec<String>) -> &mut GcpVecBuilder<'a> {
        self.layer_create_options = opts;
        self
    }

    pub fn set_pixel_out (&mut self, pixel_out: bool) -> &mut GcpVecBuilder<'a> {
        self.pixel_out = pixel_out;
        self
    }

    fn output_driver_name (&self) -> String {
        if let Some(ref name) = self.driver_name {
            name.clone()
        } else {
            let tgt_filename = self.tgt_path.to_str().unwrap(); // checked during new
            if let Some(name) = get_vector_driver_name_from_filename(tgt_filename) {
                name
            } else {
                FALLBACK_DRIVER_NAME.to_string()
            }
        }
    }

    /// run the conversion, returning the number of features written
    pub fn exec (&self) -> Result<usize> {
        initialize_gdal();

        let gcps = get_gcps(self.src_ds);
        if gcps.is_empty() {
            let src_name = self.src_ds.description().unwrap_or_default();
            return Err( GcpVecError::NoGcps(src_name))
        }

        let driver_name = self.output_driver_name();
        let driver = DriverManager::get_driver_by_name( driver_name.as_str())
            .map_err( |_| GcpVecError::NoSuchDriver( driver_name.clone()))?;
        if !driver.is_vector_creatable() {
            return Err( GcpVecError::NoSuchDriver( driver_name))
        }
        debug!("writing {} GCPs to {:?} with driver {}", gcps.len(), self.tgt_path, driver_name);

        // check if output file exists and if so delete it
        if self.tgt_path.is_file() {
            fs::remove_file( &self.tgt_path)?
        }

        let mut tgt_ds = driver.create_vector_only( &self.tgt_path)?;

        // in ground mode the layer gets the GCP spatial ref of the source (if there is one),
        // pixel/line coordinates have no SRS
        let gcp_srs: Option<SpatialRef> = if self.pixel_out { None } else { self.src_ds.gcp_spatial_ref() };
        let geom_type = if self.pixel_out {
            OGRwkbGeometryType::wkbPoint
        } else {
            OGRwkbGeometryType::wkbPoint25D
        };

        let lco: Vec<&str> = self.layer_create_options.iter().map( |s| s.as_str()).collect();
        let mut layer = tgt_ds.create_layer( LayerOptions {
            name: self.layer_name.as_str(),
            srs: gcp_srs.as_ref(),
            ty: geom_type,
            options: if lco.is_empty() { None } else { Some(lco.as_slice()) },
        })?;

        if self.pixel_out {
            layer.create_defn_fields( &[
                ("X", OGRFieldType::OFTReal),
                ("Y", OGRFieldType::OFTReal),
                ("Z", OGRFieldType::OFTReal),
                ("Id", OGRFieldType::OFTString),
                ("Info", OGRFieldType::OFTString),
            ])?;
        } else {
            layer.create_defn_fields( &[
                ("Pixel", OGRFieldType::OFTReal),
                ("Line", OGRFieldType::OFTReal),
                ("Id", OGRFieldType::OFTString),
                ("Info", OGRFieldType::OFTString),
            ])?;
        }

        let defn = Defn::from_layer( &layer);
        for gcp in &gcps {
            self.write_gcp_feature( gcp, &layer, &defn)?;
        }

        // dropping layer and tgt_ds flushes and closes the output - no explicit close here
        Ok(gcps.len())
    }

    fn write_gcp_feature (&self, gcp: &Gcp, layer: &Layer, defn: &Defn) -> Result<()> {
        let mut feature = Feature::new(defn)?;

        if self.pixel_out {
            feature.set_field_double( "X", gcp.x)?;
            feature.set_field_double( "Y", gcp.y)?;
            feature.set_field_double( "Z", gcp.z)?;

            let mut geom = Geometry::empty( OGRwkbGeometryType::wkbPoint)?;
            geom.add_point_2d( (gcp.pixel, gcp.line));
            feature.set_geometry(geom)?;

        } else {
            feature.set_field_double( "Pixel", gcp.pixel)?;
            feature.set_field_double( "Line", gcp.line)?;

            let mut geom = Geometry::empty( OGRwkbGeometryType::wkbPoint25D)?;
            geom.add_point( (gcp.x, gcp.y, gcp.z));
            feature.set_geometry(geom)?;
        }

        feature.set_field_string( "Id", gcp.id.as_str())?;
        feature.set_field_string( "Info", gcp.info.as_str())?;

        feature.create(layer)?;
        Ok(())
    }
}
