pub mod configuration;

pub mod error;

pub mod interestrate {
    pub mod compounding;
    pub mod inversemodifiedfollowing;
    pub mod index {
        pub mod compoundedindex;
        pub mod compoundedrate;
        pub mod benchmark;
    }
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod round;
}

pub mod series {
    pub mod timeseries;
    pub mod resets;
}

pub mod time {
    pub mod utility;
    pub mod period;
    pub mod rangeofdates;
    pub mod businessdayadjuster;
    pub mod termdate;

    pub mod holiday {
        pub mod annualholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod holidaycalendarmanager;
    }

    pub mod schedule {
        pub mod compoundingschedule;
    }

    pub mod daycounter {
        pub mod daycounter;
        pub mod daycountermanager;
    }
}
