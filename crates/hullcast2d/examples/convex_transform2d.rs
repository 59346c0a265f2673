use hullcast2d::math::{Point, Vector};
use hullcast2d::scene::{Scene, SceneConfig};

fn main() {
    let mut scene =
        Scene::with_random_shapes(SceneConfig::default(), 4, 42).expect("Invalid scene.");

    let picked = scene.shape_at_point(&scene.shapes()[0].bounding_disc().center);
    println!("Picked shape: {:?}", picked);

    let pivot = Point::new(100.0, 50.0);
    let _ = scene.translate_shape(0, &Vector::new(10.0, -5.0));
    let _ = scene.rotate_shape(1, 90.0, &pivot);
    let shape = scene.scale_shape(2, -5.0, &pivot).expect("Missing shape.");
    println!(
        "Shape 2 now has a scale of {} and an area of {}.",
        shape.scale_factor(),
        shape.area()
    );

    scene.trees().bvh.assert_well_formed(scene.shapes());
    scene.trees().quadtree.assert_well_formed(scene.shapes());
    println!("BVH depth: {}", scene.trees().bvh.depth());
    println!("Quadtree depth: {}", scene.trees().quadtree.depth());
}
