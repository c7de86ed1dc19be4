use optmap::{derive::*, CommandLineRunner, Prefixes};

#[derive(Debug, Default, CommandLine)]
#[optmap(default)]
struct Greeter {
    #[optmap(short = "n", long = "name")]
    name: String,
    #[optmap(short = "l", long = "loud")]
    loud: bool,
}

#[handlers]
impl Greeter {
    #[optmap(command = "hello")]
    fn hello(&self) {
        self.say(format!("Hello {}!", self.name));
    }

    #[optmap(command = "bye")]
    fn bye(&self) {
        self.say(format!("Goodbye {}.", self.name));
    }

    fn say(&self, message: String) {
        if self.loud {
            println!("{}", message.to_uppercase());
        } else {
            println!("{message}");
        }
    }
}

fn main() {
    let runner = CommandLineRunner::<Greeter>::new(
        Prefixes::new(["--"]).expect("Invalid prefix configuration"),
    )
    .expect("Invalid Greeter configuration");
    runner.execute();
}
