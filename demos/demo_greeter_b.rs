use optmap::{
    Command, CommandLineRunner, CommandLineTarget, Constructor, Member, ObjectMapper, Prefixes,
};

#[derive(Debug, Default)]
struct Greeter {
    name: String,
    loud: bool,
}

impl Greeter {
    fn say(&self, message: String) {
        if self.loud {
            println!("{}", message.to_uppercase());
        } else {
            println!("{message}");
        }
    }
}

fn main() {
    let registry = CommandLineTarget::new("Greeter")
        .member(
            Member::text("name", |g: &mut Greeter, value| g.name = value)
                .short("n")
                .long("name"),
        )
        .member(
            Member::switch("loud", |g: &mut Greeter, value| g.loud = value)
                .short("l")
                .long("loud"),
        )
        .constructor(Constructor::from_default())
        .command(Command::new("hello", |g: &mut Greeter| {
            g.say(format!("Hello {}!", g.name))
        }))
        .command(Command::new("bye", |g: &mut Greeter| {
            g.say(format!("Goodbye {}.", g.name))
        }))
        .build()
        .expect("Invalid Greeter configuration");
    let prefixes = Prefixes::new(["--"]).expect("Invalid prefix configuration");
    let runner = CommandLineRunner::with_mapper(ObjectMapper::with_registry(registry, prefixes));
    runner.execute();
}
