#![allow(unused)]

use gdal::{Dataset, DriverManager};
use gdal::spatial_ref::SpatialRef;
use gdal::vector::LayerAccess;
use tempfile::TempDir;

use gcpvec::{get_vector_driver_name_from_filename, initialize_gdal, GcpVecBuilder};
use gcpvec::errors::GcpVecError;
use gcpvec::gcp::{set_gcps, Gcp};

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
fn test_ground_mode () {
    let src_ds = mem_dataset_with_gcps();
    let tmp_dir = TempDir::new().unwrap();
    let tgt_path = tmp_dir.path().join("gcps.geojson");

    let n = GcpVecBuilder::new( &src_ds, &tgt_path).unwrap().exec().unwrap();
    assert_eq!( n, 3);

    let tgt_ds = Dataset::open( &tgt_path).unwrap();
    let mut layer = tgt_ds.layer(0).unwrap();
    assert_eq!( layer.name(), "gcps");
    assert_eq!( layer.feature_count(), 3);

    let gcps = test_gcps();
    for (feature,gcp) in layer.features().zip( gcps.iter()) {
        let geom = feature.geometry().expect("feature without geometry");
        assert_eq!( geom.get_point(0), (gcp.x, gcp.y, gcp.z));

        assert_eq!( feature.field_as_double_by_name("Pixel").unwrap(), Some(gcp.pixel));
        assert_eq!( feature.field_as_double_by_name("Line").unwrap(), Some(gcp.line));
        assert_eq!( feature.field_as_string_by_name("Id").unwrap(), Some(gcp.id.clone()));
        assert_eq!( feature.field_as_string_by_name("Info").unwrap(), Some(gcp.info.clone()));
    }
}

#[test]
fn test_pixel_mode () {
    let src_ds = mem_dataset_with_gcps();
    let tmp_dir = TempDir::new().unwrap();
    let tgt_path = tmp_dir.path().join("gcps.geojson");

    let mut builder = GcpVecBuilder::new( &src_ds, &tgt_path).unwrap();
    builder.set_pixel_out(true);
    let n = builder.exec().unwrap();
    assert_eq!( n, 3);

    let tgt_ds = Dataset::open( &tgt_path).unwrap();
    let mut layer = tgt_ds.layer(0).unwrap();
    assert_eq!( layer.feature_count(), 3);

    let gcps = test_gcps();
    for (feature,gcp) in layer.features().zip( gcps.iter()) {
        let geom = feature.geometry().expect("feature without geometry");
        assert_eq!( geom.get_point(0), (gcp.pixel, gcp.line, 0.0));

        assert_eq!( feature.field_as_double_by_name("X").unwrap(), Some(gcp.x));
        assert_eq!( feature.field_as_double_by_name("Y").unwrap(), Some(gcp.y));
        assert_eq!( feature.field_as_double_by_name("Z").unwrap(), Some(gcp.z));
        assert_eq!( feature.field_as_string_by_name("Id").unwrap(), Some(gcp.id.clone()));
    }
}

#[test]
fn test_layer_name_override () {
    let src_ds = mem_dataset_with_gcps();
    let tmp_dir = TempDir::new().unwrap();
    let tgt_path = tmp_dir.path().join("gcps.geojson");

    let mut builder = GcpVecBuilder::new( &src_ds, &tgt_path).unwrap();
    builder.set_layer_name("control_points");
    builder.exec().unwrap();

    let tgt_ds = Dataset::open( &tgt_path).unwrap();
    let layer = tgt_ds.layer(0).unwrap();
    assert_eq!( layer.name(), "control_points");
}

#[test]
fn test_source_without_gcps () {
    let driver = DriverManager::get_driver_by_name("MEM").unwrap();
    let src_ds = driver.create("", 16, 16, 1).unwrap();
    let tmp_dir = TempDir::new().unwrap();
    let tgt_path = tmp_dir.path().join("gcps.geojson");

    let res = GcpVecBuilder::new( &src_ds, &tgt_path).unwrap().exec();
    assert!( matches!( res, Err(GcpVecError::NoGcps(_))));
}

#[test]
fn test_unknown_driver () {
    let src_ds = mem_dataset_with_gcps();
    let tmp_dir = TempDir::new().unwrap();
    let tgt_path = tmp_dir.path().join("gcps.out");

    let mut builder = GcpVecBuilder::new( &src_ds, &tgt_path).unwrap();
    builder.set_driver_name("NoSuchFormat");
    assert!( matches!( builder.exec(), Err(GcpVecError::NoSuchDriver(_))));

    // a registered driver that cannot create vector datasets is rejected the same way
    let mut builder = GcpVecBuilder::new( &src_ds, &tgt_path).unwrap();
    builder.set_driver_name("GTiff");
    assert!( matches!( builder.exec(), Err(GcpVecError::NoSuchDriver(_))));
}

#[test]
fn test_driver_inference () {
    assert!( initialize_gdal());

    assert_eq!( get_vector_driver_name_from_filename("gcps.geojson").as_deref(), Some("GeoJSON"));
    assert_eq!( get_vector_driver_name_from_filename("gcps.shp").as_deref(), Some("ESRI Shapefile"));
    assert_eq!( get_vector_driver_name_from_filename("gcps.no_such_ext"), None);
    assert_eq!( get_vector_driver_name_from_filename("gcps"), None);
}
