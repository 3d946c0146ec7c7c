#![allow(unused)]

use gdal::{Dataset, DriverManager};
use gdal::spatial_ref::SpatialRef;

use gcpvec::gcp::{gcp_count, gcp_projection, get_gcps, set_gcps, Gcp};

fn test_gcps () -> Vec<Gcp> {
    vec![
        Gcp::new( "1", "upper left", 0.0, 0.0, -122.5, 38.2, 10.0),
        Gcp::new( "2", "", 512.0, 0.0, -122.0, 38.2, 12.5),
        Gcp::new( "3", "lower left", 0.0, 256.0, -122.5, 37.9, 0.0),
    ]
}

fn mem_dataset_with_gcps () -> Dataset {
    let driver = DriverManager::get_driver_by_name("MEM").unwrap();
    let mut ds = driver.create("", 512, 256, 1).unwrap();

    let srs = SpatialRef::from_epsg(4326).unwrap();
    set_gcps( &mut ds, &test_gcps(), Some(&srs)).unwrap();
    ds
}

#[test]
fn test_gcp_roundtrip () {
    let ds = mem_dataset_with_gcps();
    assert_eq!( gcp_count(&ds), 3);

    let gcps = get_gcps(&ds);
    assert_eq!( gcps, test_gcps());

    let wkt = gcp_projection(&ds).expect("no GCP projection");
    assert!( wkt.contains("WGS 84"));
    assert!( ds.gcp_spatial_ref().is_some());
}

#[test]
fn test_without_gcps () {
    let driver = DriverManager::get_driver_by_name("MEM").unwrap();
    let ds = driver.create("", 16, 16, 1).unwrap();

    assert_eq!( gcp_count(&ds), 0);
    assert!( get_gcps(&ds).is_empty());
    assert!( gcp_projection(&ds).is_none());
}

#[test]
fn test_set_gcps_without_srs () {
    let driver = DriverManager::get_driver_by_name("MEM").unwrap();
    let mut ds = driver.create("", 512, 256, 1).unwrap();

    set_gcps( &mut ds, &test_gcps(), None).unwrap();

    assert_eq!( gcp_count(&ds), 3);
    assert!( gcp_projection(&ds).is_none());
}
