//! Seed rows for the mock record store, mirroring the SQL schema the
//! remote tables use.

use model::{
    decimal::Decimal,
    member::Member,
    package::Package,
    payment::{Payment, PaymentKind},
    plan::Plan,
    registration::{Registration, RegistrationStatus},
    trainer::Trainer,
};

pub fn members() -> Vec<Member> {
    vec![
        member(
            5,
            58487246,
            "Mike",
            "D",
            "Williams",
            "Male",
            "+14526-5455-44",
            "Sample Address",
            "mwilliams@sample.com",
            "2020-10-21 13:18:19",
        ),
        member(
            6,
            59430244,
            "Claire",
            "D",
            "Blake",
            "Female",
            "+18456-5455-55",
            "Sample",
            "cblake@sample.com",
            "2020-10-21 14:57:54",
        ),
        member(
            7,
            60125478,
            "John",
            "A",
            "Smith",
            "Male",
            "+91-9876543210",
            "123 Main St, Hyderabad",
            "john.smith@example.com",
            "2023-04-15 10:30:00",
        ),
        member(
            8,
            61238975,
            "Priya",
            "R",
            "Sharma",
            "Female",
            "+91-8765432109",
            "456 Park Ave, Hyderabad",
            "priya.sharma@example.com",
            "2023-05-22 09:45:00",
        ),
        member(
            9,
            62347896,
            "Raj",
            "K",
            "Patel",
            "Male",
            "+91-7654321098",
            "789 Oak St, Hyderabad",
            "raj.patel@example.com",
            "2023-06-10 14:20:00",
        ),
    ]
}

pub fn trainers() -> Vec<Trainer> {
    vec![
        trainer(1, "John Smith", "+18456-5455-55", "jsmith@sample.com", 500),
        trainer(
            2,
            "Amit Kumar",
            "+91-9876543211",
            "amit.kumar@shackfitness.com",
            600,
        ),
        trainer(
            3,
            "Deepika Reddy",
            "+91-8765432108",
            "deepika.reddy@shackfitness.com",
            550,
        ),
        trainer(
            4,
            "Rahul Verma",
            "+91-7654321097",
            "rahul.verma@shackfitness.com",
            520,
        ),
    ]
}

pub fn plans() -> Vec<Plan> {
    vec![
        plan(1, 12, 1000),
        plan(2, 6, 600),
        plan(3, 3, 350),
        plan(4, 1, 150),
    ]
}

pub fn packages() -> Vec<Package> {
    vec![
        package(2, "Sample Package", "Program sample + trainer", 3500),
        package(
            3,
            "Basic Fitness",
            "Access to gym equipment and basic guidance",
            2000,
        ),
        package(
            4,
            "Premium Fitness",
            "Full access to gym, pool, and group classes",
            4000,
        ),
        package(
            5,
            "Elite Training",
            "Personal trainer, nutrition plan, and premium access",
            6000,
        ),
    ]
}

pub fn registrations() -> Vec<Registration> {
    vec![
        registration(2, 5, 1, 2, "2020-10-21", "2021-10-21", 0, false, "2020-10-21"),
        registration(3, 5, 1, 2, "2020-10-21", "2021-10-21", 0, true, "2020-10-21"),
        registration(4, 6, 1, 2, "2019-10-19", "2020-10-19", 0, false, "2020-10-21"),
        registration(5, 6, 1, 2, "2020-10-21", "2021-10-21", 0, true, "2020-10-21"),
        registration(6, 7, 2, 3, "2023-04-15", "2023-10-15", 2, true, "2023-04-15"),
        registration(7, 8, 3, 4, "2023-05-22", "2023-08-22", 3, true, "2023-05-22"),
        registration(8, 9, 4, 5, "2023-06-10", "2023-07-10", 1, true, "2023-06-10"),
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        payment(
            1,
            2,
            4500,
            "First payment",
            PaymentKind::Monthly,
            "2020-10-21 14:39:26",
        ),
        payment(
            2,
            2,
            3500,
            "payment for november",
            PaymentKind::Monthly,
            "2020-10-21 14:39:52",
        ),
        payment(
            3,
            6,
            2600,
            "Initial registration",
            PaymentKind::Registration,
            "2023-04-15 10:35:00",
        ),
        payment(
            4,
            7,
            4350,
            "Registration payment",
            PaymentKind::Registration,
            "2023-05-22 09:50:00",
        ),
        payment(
            5,
            7,
            4000,
            "Monthly payment - June",
            PaymentKind::Monthly,
            "2023-06-01 11:25:00",
        ),
        payment(
            6,
            8,
            6150,
            "Full payment",
            PaymentKind::Registration,
            "2023-06-10 14:25:00",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: i64,
    member_id: i64,
    firstname: &str,
    middlename: &str,
    lastname: &str,
    gender: &str,
    contact: &str,
    address: &str,
    email: &str,
    date_created: &str,
) -> Member {
    Member {
        id,
        member_id,
        firstname: firstname.to_string(),
        middlename: middlename.to_string(),
        lastname: lastname.to_string(),
        gender: gender.to_string(),
        contact: contact.to_string(),
        address: address.to_string(),
        email: email.to_string(),
        date_created: date_created.to_string(),
    }
}

fn trainer(id: i64, name: &str, contact: &str, email: &str, rate: i64) -> Trainer {
    Trainer {
        id,
        name: name.to_string(),
        contact: contact.to_string(),
        email: email.to_string(),
        rate: Decimal::int(rate),
    }
}

fn plan(id: i64, months: u32, amount: i64) -> Plan {
    Plan {
        id,
        months,
        amount: Decimal::int(amount),
    }
}

fn package(id: i64, name: &str, description: &str, amount: i64) -> Package {
    Package {
        id,
        name: name.to_string(),
        description: description.to_string(),
        amount: Decimal::int(amount),
    }
}

#[allow(clippy::too_many_arguments)]
fn registration(
    id: i64,
    member_id: i64,
    plan_id: i64,
    package_id: i64,
    start_date: &str,
    end_date: &str,
    trainer_id: i64,
    active: bool,
    date_created: &str,
) -> Registration {
    Registration {
        id,
        member_id,
        plan_id,
        package_id,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        trainer_id,
        status: if active {
            RegistrationStatus::Active
        } else {
            RegistrationStatus::Inactive
        },
        date_created: date_created.to_string(),
    }
}

fn payment(
    id: i64,
    registration_id: i64,
    amount: i64,
    remarks: &str,
    kind: PaymentKind,
    date_created: &str,
) -> Payment {
    Payment {
        id,
        registration_id,
        amount: Decimal::int(amount),
        remarks: remarks.to_string(),
        kind,
        date_created: date_created.to_string(),
    }
}
