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

//! ground control point access for raster datasets
//!
//! the gdal crate only exposes the GCP spatial reference, so list access goes through
//! the gdal-sys C API

use std::ffi::CString;

use gdal::Dataset;
use gdal::spatial_ref::SpatialRef;
use gdal_sys::{CPLErr, GDAL_GCP};
use libc::{c_char, c_int};

use crate::errors::{last_cpl_err, Result};
use crate::pc_char_to_string;

/// owned ground control point record - a correspondence between a pixel/line location
/// in a raster and a (x,y,z) ground coordinate
#[derive(Debug,Clone,PartialEq)]
pub struct Gcp {
    pub id: String,
    pub info: String,
    pub pixel: f64,
    pub line: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Gcp {
    pub fn new (id: &str, info: &str, pixel: f64, line: f64, x: f64, y: f64, z: f64) -> Gcp {
        Gcp {
            id: id.to_string(),
            info: info.to_string(),
            pixel, line, x, y, z
        }
    }

    unsafe fn from_c_gcp (c_gcp: *const GDAL_GCP) -> Gcp {
        Gcp {
            id: pc_char_to_string( (*c_gcp).pszId),
            info: pc_char_to_string( (*c_gcp).pszInfo),
            pixel: (*c_gcp).dfGCPPixel,
            line: (*c_gcp).dfGCPLine,
            x: (*c_gcp).dfGCPX,
            y: (*c_gcp).dfGCPY,
            z: (*c_gcp).dfGCPZ,
        }
    }
}

pub fn gcp_count (ds: &Dataset) -> usize {
    unsafe { gdal_sys::GDALGetGCPCount( ds.c_dataset()) as usize }
}

/// fetch the GCP list of a dataset as owned records (empty if there are none)
pub fn get_gcps (ds: &Dataset) -> Vec<Gcp> {
    unsafe {
        let count = gdal_sys::GDALGetGCPCount( ds.c_dataset()) as usize;
        let c_gcps = gdal_sys::GDALGetGCPs( ds.c_dataset());
        if c_gcps.is_null() {
            return Vec::new()
        }

        let mut gcps = Vec::with_capacity(count);
        for i in 0..count {
            gcps.push( Gcp::from_c_gcp( c_gcps.add(i)));
        }
        gcps
    }
}

/// WKT projection definition for the GCPs of a dataset, None if there is none set
pub fn gcp_projection (ds: &Dataset) -> Option<String> {
    let wkt = pc_char_to_string( unsafe { gdal_sys::GDALGetGCPProjection( ds.c_dataset()) });
    if wkt.is_empty() { None } else { Some(wkt) }
}

/// store GCPs in a writable dataset - the C API copies the list so the CStrings only
/// have to stay alive for the duration of the call
pub fn set_gcps (ds: &mut Dataset, gcps: &[Gcp], srs: Option<&SpatialRef>) -> Result<()> {
    let c_ids: Vec<CString> = gcps.iter()
        .map( |g| CString::new(g.id.as_str()))
        .collect::<std::result::Result<_,_>>()?;
    let c_infos: Vec<CString> = gcps.iter()
        .map( |g| CString::new(g.info.as_str()))
        .collect::<std::result::Result<_,_>>()?;

    let c_gcps: Vec<GDAL_GCP> = gcps.iter().enumerate()
        .map( |(i,g)| GDAL_GCP {
            pszId: c_ids[i].as_ptr() as *mut c_char,
            pszInfo: c_infos[i].as_ptr() as *mut c_char,
            dfGCPPixel: g.pixel,
            dfGCPLine: g.line,
            dfGCPX: g.x,
            dfGCPY: g.y,
            dfGCPZ: g.z,
        })
        .collect();

    let c_wkt = match srs {
        Some(srs) => CString::new( srs.to_wkt()?)?,
        None => CString::new("")?
    };

    let rv = unsafe {
        gdal_sys::GDALSetGCPs( ds.c_dataset(), c_gcps.len() as c_int, c_gcps.as_ptr(), c_wkt.as_ptr())
    };
    if rv != CPLErr::CE_None {
        return Err( last_cpl_err(rv))
    }
    Ok(())
}
