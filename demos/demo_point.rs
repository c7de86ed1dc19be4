use optmap::{derive::*, CommandLineRunner, Prefixes};

#[derive(Debug, CommandLine)]
struct Point {
    #[optmap(short = "x")]
    x: String,
    #[optmap(short = "y")]
    y: String,
}

#[handlers]
impl Point {
    #[optmap(constructor)]
    fn new(x: String, y: String) -> Self {
        Self { x, y }
    }

    #[optmap(constructor)]
    fn diagonal(x: String) -> Self {
        Self { y: x.clone(), x }
    }

    #[optmap(command = "show")]
    fn show(&self) {
        println!("({}, {})", self.x, self.y);
    }
}

fn main() {
    let runner =
        CommandLineRunner::<Point>::new(Prefixes::default()).expect("Invalid Point configuration");
    runner.execute();
}
