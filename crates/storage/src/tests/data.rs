use trainer_domain as domain;

pub const EXERCISES: &[&str; 10] = &[
    "Reverse a string without using slicing",
    "Implement FizzBuzz",
    "Read a file and count the words",
    "Implement a stack using a list",
    "Parse command line arguments",
    "Write a binary search",
    "Implement a linked list",
    "Convert a decimal number to binary",
    "Find all prime numbers below n",
    "Merge two sorted lists",
];

pub const NEW_EXERCISES: &str = "\
Use argparse to calculate the power of two numbers
Implement a queue using two stacks
Flatten a nested list
";

pub static EXERCISE_SET: std::sync::LazyLock<domain::ExerciseSet> =
    std::sync::LazyLock::new(|| {
        domain::ExerciseSet::try_from(
            EXERCISES
                .iter()
                .map(|description| domain::Exercise::new(*description))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    });
