mod camera;
mod ray;
mod scene;
mod shapes;
mod spectrum;
mod vector;
