#[macro_use]
extern crate lazy_static;

pub mod errors;
pub mod gcp;
pub mod convert;

use std::collections::HashMap;
use std::ffi::CStr;
use std::path::Path;
use gdal::{Driver, DriverManager, Metadata};
use libc::c_char;

pub use crate::convert::GcpVecBuilder;
pub use crate::gcp::Gcp;

/// driver metadata queries the gdal crate does not surface directly
pub trait DriverExt {
    fn get_driver_extensions (&self) -> Vec<String>;
    fn is_vector_creatable (&self) -> bool;
}

impl DriverExt for Driver {
    fn get_driver_extensions (&self) -> Vec<String> {
        if let Some(s) = self.metadata_item("DMD_EXTENSIONS", "") {
            s.split(' ').map(|x| x.trim().to_string()).collect()
        } else {
            vec!()
        }
    }

    fn is_vector_creatable (&self) -> bool {
        self.metadata_item("DCAP_VECTOR", "").as_deref() == Some("YES")
            && self.metadata_item("DCAP_CREATE", "").as_deref() == Some("YES")
    }
}

lazy_static! {
    static ref VECTOR_EXTS: HashMap<String,usize> = new_vector_extension_map();
}

pub fn initialize_gdal() -> bool {
    VECTOR_EXTS.len() > 0
}

fn new_vector_extension_map () -> HashMap<String,usize> { // file extension -> driver #
    DriverManager::register_all();
    let mut em = HashMap::new();

    let count = DriverManager::count();
    for i in 0..count {
        if let Ok(driver) = DriverManager::get_driver(i) {
            if driver.is_vector_creatable() {
                for ext in driver.get_driver_extensions() {
                    em.entry(ext).or_insert(i); // several drivers can claim the same extension - keep the first
                }
            }
        }
    }

    em
}

pub fn get_vector_driver_from_filename (filename: &str) -> Option<Driver> {
    get_filename_extension(filename)
        .and_then( |ext| VECTOR_EXTS.get( ext))
        .and_then( |n| DriverManager::get_driver(*n).ok())
}

pub fn get_vector_driver_name_from_filename (filename: &str) -> Option<String> {
    get_vector_driver_from_filename(filename).map( |d| d.short_name())
}

/// short names of all registered drivers that can create vector datasets
pub fn vector_output_drivers () -> Vec<String> {
    initialize_gdal();

    let mut names = Vec::new();
    for i in 0..DriverManager::count() {
        if let Ok(driver) = DriverManager::get_driver(i) {
            if driver.is_vector_creatable() {
                names.push( driver.short_name());
            }
        }
    }
    names
}

fn get_filename_extension (filename: &str) -> Option<&str> {
    Path::new(filename).extension().and_then( |ext| ext.to_str())
}

pub fn pc_char_to_string (pc_char: *const c_char) -> String {
    if pc_char.is_null() {
        String::new()
    } else {
        let c_str = unsafe { CStr::from_ptr(pc_char) };
        c_str.to_string_lossy().into_owned()
    }
}
